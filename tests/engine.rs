use credibility_engine::model::{
    Classifier, FeatureVector, ModelCapability, RawClassification, Vectorizer,
};
use credibility_engine::{
    CredibilityEngine, CredibilityStatus, EngineError, FactCheck, ModelError, Prediction,
    SignalAdjustments,
};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Default)]
struct RecordingVectorizer {
    seen: Mutex<Vec<String>>,
}

impl RecordingVectorizer {
    fn seen(&self) -> Vec<String> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }
}

impl Vectorizer for RecordingVectorizer {
    fn vectorize(&self, text: &str) -> Result<FeatureVector, ModelError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(text.to_string());
        }
        Ok(FeatureVector::new(1, vec![(0, text.len() as f64)]))
    }
}

struct FixedClassifier {
    label: u8,
    probabilities: [f64; 2],
}

impl FixedClassifier {
    fn real(probability_real: f64) -> Self {
        Self {
            label: if probability_real >= 0.5 { 1 } else { 0 },
            probabilities: [1.0 - probability_real, probability_real],
        }
    }
}

impl Classifier for FixedClassifier {
    fn classify(&self, _features: &FeatureVector) -> Result<RawClassification, ModelError> {
        Ok(RawClassification {
            label: self.label,
            probabilities: self.probabilities,
        })
    }
}

struct FailingVectorizer;

impl Vectorizer for FailingVectorizer {
    fn vectorize(&self, _text: &str) -> Result<FeatureVector, ModelError> {
        Err(ModelError::Invalid {
            reason: "vocabulary not loaded".to_string(),
        })
    }
}

fn engine_with(probability_real: f64) -> (CredibilityEngine, Arc<RecordingVectorizer>) {
    let vectorizer = Arc::new(RecordingVectorizer::default());
    let capability = ModelCapability::new(
        vectorizer.clone(),
        Arc::new(FixedClassifier::real(probability_real)),
    );
    (
        CredibilityEngine::new(capability, SignalAdjustments::default()),
        vectorizer,
    )
}

#[test]
fn evaluates_clickbait_scenario() {
    let (engine, _) = engine_with(0.55);

    let verdict = engine
        .evaluate("BREAKING!!!! Doctors HATE this one trick")
        .expect("verdict");

    assert_eq!(verdict.score, 25);
    assert_eq!(verdict.status, CredibilityStatus::Unreliable);
    assert_eq!(verdict.indicators.fact_check, FactCheck::Disputed);
    assert_eq!(verdict.model_prediction, Prediction::Real);
    assert!((verdict.confidence_real - 55.0).abs() < 1e-9);
    assert!((verdict.confidence_fake - 45.0).abs() < 1e-9);
}

#[test]
fn evaluates_cited_report_scenario() {
    let (engine, _) = engine_with(0.65);

    let verdict = engine
        .evaluate("According to a new study, researchers report modest growth.")
        .expect("verdict");

    assert_eq!(verdict.score, 75);
    assert_eq!(verdict.status, CredibilityStatus::Reliable);
}

#[test]
fn all_signals_scenario_clamps_each_step() {
    let (engine, _) = engine_with(0.99);

    let verdict = engine
        .evaluate("SHOCKING!!!! reported by insiders")
        .expect("verdict");

    assert_eq!(verdict.score, 79);
    assert_eq!(verdict.status, CredibilityStatus::Reliable);
}

#[test]
fn configured_exclamation_limit_drives_the_penalty() {
    let strict = CredibilityEngine::new(
        ModelCapability::new(
            Arc::new(RecordingVectorizer::default()),
            Arc::new(FixedClassifier::real(0.5)),
        ),
        SignalAdjustments {
            exclamation_limit: 1,
            ..SignalAdjustments::default()
        },
    );
    let (lenient, _) = engine_with(0.5);

    assert_eq!(strict.evaluate("Wow!! news").expect("verdict").score, 40);
    assert_eq!(lenient.evaluate("Wow!! news").expect("verdict").score, 50);
}

#[test]
fn classifier_receives_normalized_text() {
    let (engine, vectorizer) = engine_with(0.5);

    engine
        .evaluate("Visit http://x.com/a <b>ALERT</b>: 3 new Cases!")
        .expect("verdict");

    assert_eq!(vectorizer.seen(), vec!["visit alert new cases".to_string()]);
}

#[test]
fn empty_input_is_rejected_before_classification() {
    let (engine, vectorizer) = engine_with(0.5);

    assert_eq!(engine.evaluate(""), Err(EngineError::EmptyInput));
    assert_eq!(engine.evaluate("  \n\t "), Err(EngineError::EmptyInput));
    assert!(vectorizer.seen().is_empty());
}

#[test]
fn unavailable_classifier_fails_every_request() {
    let engine = CredibilityEngine::unavailable("model file missing", SignalAdjustments::default());

    assert!(!engine.is_ready());
    assert!(engine.capability().is_none());
    for _ in 0..2 {
        let err = engine.evaluate("Some headline").expect_err("unavailable");
        assert_eq!(err.kind(), "classifier_unavailable");
        assert_eq!(
            err,
            EngineError::ClassifierUnavailable {
                reason: "model file missing".to_string()
            }
        );
    }
    assert_eq!(engine.evaluate(" "), Err(EngineError::EmptyInput));
}

#[test]
fn vectorizer_failure_is_propagated() {
    let capability = ModelCapability::new(
        Arc::new(FailingVectorizer),
        Arc::new(FixedClassifier::real(0.9)),
    );
    let engine = CredibilityEngine::new(capability, SignalAdjustments::default());

    let err = engine.evaluate("Some headline").expect_err("failure");

    assert_eq!(err.kind(), "classification_failure");
    assert!(err.to_string().contains("vocabulary not loaded"));
}

#[test]
fn unknown_label_is_a_classification_failure() {
    let capability = ModelCapability::new(
        Arc::new(RecordingVectorizer::default()),
        Arc::new(FixedClassifier {
            label: 2,
            probabilities: [0.5, 0.5],
        }),
    );
    let engine = CredibilityEngine::new(capability, SignalAdjustments::default());

    let err = engine.evaluate("Some headline").expect_err("failure");

    assert!(matches!(err, EngineError::ClassificationFailure { .. }));
}

#[test]
fn evaluation_is_deterministic() {
    let (engine, _) = engine_with(0.42);
    let text = "Officials say URGENT action is needed!!";

    let first = engine.evaluate(text).expect("verdict");
    let second = engine.evaluate(text).expect("verdict");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("json"),
        serde_json::to_string(&second).expect("json")
    );
}

#[test]
fn engine_is_shared_across_threads() {
    let (engine, _) = engine_with(0.8);
    let engine = Arc::new(engine);
    let expected = engine.evaluate("Research shows steady progress").expect("verdict");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.evaluate("Research shows steady progress"))
        })
        .collect();

    for handle in handles {
        let verdict = handle.join().expect("thread").expect("verdict");
        assert_eq!(verdict, expected);
    }
    assert_eq!(expected.score, 90);
}
