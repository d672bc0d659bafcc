//! Fixtures shared by use case tests.

use crate::ports::intake_store::{IntakeStore, StoreError};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use triage_domain::intake::sort_newest_first;
use triage_domain::{
    AnswerOption, DecisionTable, DiagnosisRecord, IntakeId, IntakeRecord, NewIntake, Pattern,
    Question, Questionnaire, Rule,
};

/// Yes/no questionnaire with a single "fever" rule on question 1.
pub(crate) fn sample_table() -> DecisionTable {
    let questions = (1..=8)
        .map(|i| {
            Question::new(
                format!("q{}", i),
                format!("Question {}", i),
                vec![AnswerOption::new("yes", "Yes"), AnswerOption::new("no", "No")],
            )
        })
        .collect();
    let questionnaire = Questionnaire::new(questions).unwrap();

    let rules = vec![Rule::new(
        "fever",
        Pattern::from_codes(["yes", "*", "*", "*", "*", "*", "*", "*"]),
        DiagnosisRecord::new("Fever").with_injections(["paracetamol 10ml I/M"]),
    )];

    DecisionTable::new(questionnaire, rules, DiagnosisRecord::new("Healthy")).unwrap()
}

/// Store that keeps records in memory and counts calls.
#[derive(Default)]
pub(crate) struct RecordingStore {
    records: Mutex<Vec<IntakeRecord>>,
    pub creates: AtomicUsize,
    pub fail: bool,
}

impl RecordingStore {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn create_calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IntakeStore for RecordingStore {
    async fn create(&self, intake: NewIntake) -> Result<IntakeRecord, StoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Unavailable("disk full".to_string()));
        }
        let mut records = self.records.lock().unwrap();
        let record = IntakeRecord::new(
            IntakeId(records.len() as u64 + 1),
            intake,
            chrono::Utc::now(),
        );
        records.push(record.clone());
        Ok(record)
    }

    async fn list_recent(&self) -> Result<Vec<IntakeRecord>, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("disk full".to_string()));
        }
        let mut records = self.records.lock().unwrap().clone();
        sort_newest_first(&mut records);
        Ok(records)
    }
}
