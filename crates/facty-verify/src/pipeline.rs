//! The fact-check pipeline.
//!
//! ```text
//! article ─ satire? ─yes─▶ fixed Satire report
//!              │no
//!              ├─ per_claim: extract ─▶ verify × N (paced, cancellable) ─▶ compile
//!              └─ aggregate: one combined call ─▶ normalize
//! ```

use chrono::NaiveDate;
use facty_client::{ChatTransport, PerplexityClient};
use facty_config::FactyConfig;
use facty_core::Report;
use facty_core::enums::{ReportStatus, Stage, VerificationMode};
use tokio_util::sync::CancellationToken;

use crate::aggregate::AggregateVerifier;
use crate::compiler::compile;
use crate::error::FactCheckError;
use crate::extractor::ClaimExtractor;
use crate::pacer::{FixedInterval, Pacer};
use crate::progress::{ProgressObserver, ProgressUpdate};
use crate::satire::{is_satire, satire_report};
use crate::settings::CheckSettings;
use crate::verifier::ClaimVerifier;

pub const NO_CLAIMS_SCORE: u8 = 75;
pub const NO_CLAIMS_DESCRIPTION: &str =
    "No specific factual claims found to verify in this article.";

/// Runs fact-checks against one chat transport with fixed settings.
pub struct FactChecker<T, P = FixedInterval> {
    transport: T,
    settings: CheckSettings,
    pacer: P,
    cancel: CancellationToken,
}

impl FactChecker<PerplexityClient> {
    /// Build a checker backed by the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`FactCheckError::Config`] if the verification options are
    /// invalid, or [`FactCheckError::Client`] if no API key is configured.
    pub fn from_config(config: &FactyConfig) -> Result<Self, FactCheckError> {
        config.verification.validate()?;
        let client = PerplexityClient::new(&config.perplexity)?;
        Ok(Self::new(client, CheckSettings::from(config)))
    }
}

impl<T: ChatTransport> FactChecker<T> {
    /// Pace per-claim calls by `settings.claim_delay`.
    #[must_use]
    pub fn new(transport: T, settings: CheckSettings) -> Self {
        let pacer = FixedInterval::new(settings.claim_delay);
        Self {
            transport,
            settings,
            pacer,
            cancel: CancellationToken::new(),
        }
    }
}

impl<T: ChatTransport, P: Pacer> FactChecker<T, P> {
    #[must_use]
    pub fn with_pacer<Q: Pacer>(self, pacer: Q) -> FactChecker<T, Q> {
        FactChecker {
            transport: self.transport,
            settings: self.settings,
            pacer,
            cancel: self.cancel,
        }
    }

    /// Stop verifying further claims once `token` is cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &CheckSettings {
        &self.settings
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Fact-check one prepared article as of `today`.
    ///
    /// Infallible: every service or payload failure is folded into the
    /// returned report.
    pub async fn check(
        &self,
        article: &str,
        today: NaiveDate,
        observer: &dyn ProgressObserver,
    ) -> Report {
        let mode = self.settings.mode;
        let progress = |percent, stage, message: &str| {
            observer.on_progress(&ProgressUpdate::new(percent, stage, message));
        };

        let (start, message) = match mode {
            VerificationMode::PerClaim => (10, "Starting multi-step analysis..."),
            VerificationMode::Aggregate => (15, "Starting deep research..."),
        };
        progress(start, Stage::Analyzing, message);

        if is_satire(article) {
            tracing::info!(mode = %mode, "satire detected, skipping verification");
            progress(100, Stage::Complete, "Satire detected");
            return satire_report(mode);
        }

        let result = match mode {
            VerificationMode::PerClaim => self.check_per_claim(article, today, observer).await,
            VerificationMode::Aggregate => {
                progress(30, Stage::Researching, "Researching claims with real-time sources...");
                let result = AggregateVerifier::new(&self.settings)
                    .verify_all(&self.transport, article, today)
                    .await;
                progress(95, Stage::Generating, "Compiling detailed report...");
                result
            }
        };

        progress(100, Stage::Complete, "Analysis complete");
        result
    }

    async fn check_per_claim(
        &self,
        article: &str,
        today: NaiveDate,
        observer: &dyn ProgressObserver,
    ) -> Report {
        observer.on_progress(&ProgressUpdate::new(
            20,
            Stage::Extracting,
            "Extracting factual claims...",
        ));
        let claims = ClaimExtractor::new(&self.settings)
            .extract(&self.transport, article, today)
            .await;
        if claims.is_empty() {
            tracing::info!("no claims to verify");
            return Report::empty(
                NO_CLAIMS_SCORE,
                ReportStatus::NeedsReview,
                NO_CLAIMS_DESCRIPTION,
                VerificationMode::PerClaim,
            );
        }

        let total = claims.len();
        tracing::info!(claims = total, "claims extracted");
        observer.on_progress(&ProgressUpdate::new(
            30,
            Stage::Verifying,
            format!("Found {total} claims. Verifying each claim..."),
        ));

        let verifier = ClaimVerifier::new(&self.settings);
        let mut verdicts = Vec::with_capacity(total);
        for (index, claim) in claims.iter().enumerate() {
            self.pacer.pace().await;
            if self.cancel.is_cancelled() {
                tracing::warn!(
                    verified = verdicts.len(),
                    skipped = total - index,
                    "fact-check cancelled"
                );
                break;
            }

            let position = index + 1;
            let percent = u8::try_from(30 + position * 60 / total).unwrap_or(90);
            observer.on_progress(&ProgressUpdate::new(
                percent,
                Stage::Verifying,
                format!("Verifying claim {position} of {total}..."),
            ));
            verdicts.push(
                verifier
                    .verify(&self.transport, &claim.text, claim.kind, today)
                    .await,
            );
        }

        observer.on_progress(&ProgressUpdate::new(
            95,
            Stage::Generating,
            "Compiling comprehensive report...",
        ));
        let verified = verdicts.len();
        compile(verdicts, verified)
    }
}
