use anyhow::Context;
use facty_config::FactyConfig;
use facty_verify::{CancellationToken, FactChecker, prepare_article};

use crate::cli::{CheckArgs, GlobalFlags, ModeArg};
use crate::output;
use crate::progress::ProgressReporter;

/// Handle `facty check`.
pub async fn handle(args: &CheckArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let body = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let article = prepare_article(args.title.as_deref().unwrap_or_default(), &body);
    if article.is_empty() {
        anyhow::bail!("{} contains no article text", args.file.display());
    }

    let mut config = FactyConfig::load_with_dotenv().context("failed to load facty config")?;
    apply_overrides(&mut config, args);

    let cancel = CancellationToken::new();
    let checker = FactChecker::from_config(&config)
        .context("failed to set up the fact-checker")?
        .with_cancellation(cancel.clone());
    let today = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    tracing::debug!(
        file = %args.file.display(),
        chars = article.len(),
        mode = %checker.settings().mode,
        %today,
        "checking article"
    );

    let interrupt = tokio::spawn(cancel_on_interrupt(cancel));
    let progress = ProgressReporter::new(flags.quiet);
    let report = checker.check(&article, today, &progress).await;
    interrupt.abort();
    progress.finish(&report);

    output::print(&report, flags.format)
}

/// Layer command-line options over the loaded config.
pub fn apply_overrides(config: &mut FactyConfig, args: &CheckArgs) {
    if let Some(mode) = args.mode {
        config.verification.multistep_enabled = mode == ModeArg::PerClaim;
    }
    if let Some(max_claims) = args.max_claims {
        config.verification.max_claims = max_claims;
    }
    if let Some(recency) = args.recency {
        config.verification.recency_window = recency.into();
    }
}

async fn cancel_on_interrupt(cancel: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::warn!("interrupted, reporting on the claims verified so far");
        cancel.cancel();
    }
}
