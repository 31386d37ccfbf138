use clap::Parser;
use uzo_sender::domain::model::{AbortReason, SubmitOutcome};
use uzo_sender::utils::error::{ErrorSeverity, SenderError};
use uzo_sender::utils::{logger, validation::Validate};
use uzo_sender::{CliConfig, ReqwestTransport, SubmitController, TerminalPage};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("Starting uzo-send");

    let exit_code = match run(&config).await {
        Ok(outcome) => outcome_exit_code(&outcome),
        Err(e) => {
            tracing::error!(
                "❌ Setup failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            report(&e);
            severity_exit_code(e.severity())
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

async fn run(config: &CliConfig) -> uzo_sender::Result<SubmitOutcome> {
    let settings = config.resolve()?;
    settings.validate()?;
    tracing::debug!(
        "Endpoint: {}, validation: {:?}, timeout: {:?}",
        settings.endpoint,
        settings.validation,
        settings.timeout_seconds
    );

    let mut page = TerminalPage::new(config.form_controls(&settings)?);
    let transport = ReqwestTransport::new(&settings)?;
    let controller = SubmitController::new(transport).with_policy(settings.validation);

    Ok(controller.submit(&mut page).await)
}

fn outcome_exit_code(outcome: &SubmitOutcome) -> i32 {
    match outcome {
        SubmitOutcome::Sent => 0,
        SubmitOutcome::Aborted(reason) => {
            // 頁面上不會有任何提示，終端機至少說明一下
            match reason {
                AbortReason::UnparsableDestination => {
                    eprintln!("Nothing sent: destination must start with a nine-digit number")
                }
                AbortReason::InvalidPayload => {
                    eprintln!("Nothing sent: the form did not pass strict validation")
                }
            }
            4
        }
        SubmitOutcome::Rejected(_) => 2,
        SubmitOutcome::Failed(e) => {
            report(e);
            severity_exit_code(e.severity())
        }
    }
}

fn report(e: &SenderError) {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}

fn severity_exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
