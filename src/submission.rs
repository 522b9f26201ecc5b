// src/submission.rs
//
// Write path for new byproduct listings.

use crate::domain::demo::HUB_ROUTING;
use crate::domain::{Listing, NewListing};
use crate::store::{ListingBackend, StoreError};
use rand::Rng;
use thiserror::Error;

pub const MATERIALS: [&str; 5] = [
    "High-Grade Copper Wire",
    "Industrial Cotton Offcuts",
    "PET Plastic Scrap",
    "Machined Steel Shavings",
    "Other",
];

pub const OTHER_MATERIAL: &str = "Other";

pub const MISSING_FIELDS: &str = "Please fill all fields and certify QA compliance";
pub const BAD_VOLUME: &str = "Volume must be a non-negative number";
pub const INSERT_FAILED: &str = "Failed to inject material. Please try again.";
pub const IN_PROGRESS: &str = "A submission is already in progress";

const DISTANCE_KM: (f64, f64) = (1.5, 12.0);

/// Raw values as typed into the injection form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub material: String,
    pub custom_material: String,
    pub volume: String,
    pub price: String,
    /// File name of the chosen photo. The file itself is never uploaded.
    pub photo: Option<String>,
    pub certified: bool,
}

impl SubmissionForm {
    /// Custom name when the classification is "Other", else the classification.
    pub fn effective_material(&self) -> &str {
        if self.material == OTHER_MATERIAL {
            self.custom_material.trim()
        } else {
            self.material.trim()
        }
    }

    pub fn validate(&self) -> Result<ValidSubmission, SubmissionError> {
        let material = self.effective_material();
        if material.is_empty()
            || self.volume.trim().is_empty()
            || self.price.trim().is_empty()
            || !self.certified
        {
            return Err(SubmissionError::Validation(MISSING_FIELDS.into()));
        }

        let volume: f64 = self
            .volume
            .trim()
            .parse()
            .map_err(|_| SubmissionError::Validation(BAD_VOLUME.into()))?;
        if !volume.is_finite() || volume < 0.0 {
            return Err(SubmissionError::Validation(BAD_VOLUME.into()));
        }

        Ok(ValidSubmission {
            material: material.to_string(),
            volume,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub material: String,
    pub volume: f64,
}

impl ValidSubmission {
    /// Attach the synthesized routing and haulage distance.
    pub fn into_new_listing<R: Rng>(self, rng: &mut R) -> NewListing {
        NewListing {
            material: self.material,
            routing: HUB_ROUTING.to_string(),
            distance: format!("{:.1} km", rng.gen_range(DISTANCE_KM.0..=DISTANCE_KM.1)),
            raw_volume: self.volume,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Validation(String),
    #[error("insert failed: {0}")]
    Transport(#[from] StoreError),
}

impl SubmissionError {
    /// Message shown to the person filling in the form.
    pub fn user_message(&self) -> &str {
        match self {
            SubmissionError::Validation(msg) => msg,
            SubmissionError::Transport(_) => INSERT_FAILED,
        }
    }
}

/// Lifecycle of one submission attempt.
#[derive(Debug)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded(Listing),
    Failed(SubmissionError),
}

impl SubmissionState {
    /// Idle (or a failed attempt being retried) moves to Submitting.
    pub fn begin(self) -> Result<SubmissionState, SubmissionState> {
        match self {
            SubmissionState::Idle | SubmissionState::Failed(_) => Ok(SubmissionState::Submitting),
            other => Err(other),
        }
    }

    /// Resolve a pending attempt with the real outcome of the write.
    pub fn finish(self, outcome: Result<Listing, SubmissionError>) -> SubmissionState {
        match (self, outcome) {
            (SubmissionState::Submitting, Ok(listing)) => SubmissionState::Succeeded(listing),
            (SubmissionState::Submitting, Err(e)) => SubmissionState::Failed(e),
            (other, _) => other,
        }
    }
}

pub struct SubmissionGateway<'a> {
    backend: &'a dyn ListingBackend,
}

impl<'a> SubmissionGateway<'a> {
    pub fn new(backend: &'a dyn ListingBackend) -> Self {
        Self { backend }
    }

    /// Validate and insert one listing, moving `state` through the attempt.
    /// A state that cannot start a new attempt is handed back untouched. Validation
    /// failures never reach the backend. No idempotency: two calls insert two
    /// rows.
    pub fn submit<R: Rng>(
        &self,
        state: SubmissionState,
        form: &SubmissionForm,
        rng: &mut R,
    ) -> SubmissionState {
        let pending = match state.begin() {
            Ok(s) => s,
            Err(busy) => {
                tracing::warn!("submission refused, previous attempt still pending");
                return busy;
            }
        };

        let valid = match form.validate() {
            Ok(v) => v,
            Err(e) => {
                tracing::info!(reason = %e, "submission rejected");
                return pending.finish(Err(e));
            }
        };

        // Collected by the form, not persisted by the insert.
        tracing::info!(
            material = %valid.material,
            volume = %form.volume,
            price = %form.price,
            photo = form.photo.as_deref().unwrap_or("No photo"),
            certified = form.certified,
            "submitting material"
        );

        let new_listing = valid.into_new_listing(rng);
        let outcome = self.backend.insert(&new_listing).map_err(|e| {
            tracing::error!(error = %e, "error inserting material");
            SubmissionError::from(e)
        });

        pending.finish(outcome)
    }
}
