use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::commands::Commands;
use crate::errors::{CodeQualityError, CodeQualityResult};
use crate::helpers::language_detector::LanguageDetector;
use crate::server::analysis_server::AnalysisServer;
use crate::services::analysis_service::AnalysisService;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> CodeQualityResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Serve { config, port } => self.serve_command(config, port).await,
            Commands::Analyze { file, language, kind, config } => self.analyze_command(file, language, kind, config).await,
            Commands::Validate { config } => self.validate_command(config),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> CodeQualityResult<()> {
        log::info!("🚀 Initializing codequal configuration...");

        match ConfigManager::create_sample_config(None) {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("🔑 Export GROQ_API_KEY before running 'codequal serve'.");
                log::info!("🔧 Run 'codequal validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    async fn serve_command(&self, config_path: Option<PathBuf>, port: Option<u16>) -> CodeQualityResult<()> {
        let mut config = Self::load_valid_config(config_path.as_deref())?;
        if let Some(port) = port {
            config.server.port = port;
        }

        // Fails before binding when the API key is missing.
        let service = Arc::new(AnalysisService::from_config(&config)?);
        log::info!("🤖 Using model {} via {}", config.ai.model, config.ai.provider);

        AnalysisServer::new(service, &config.server)?.run().await
    }

    async fn analyze_command(
        &self,
        file: PathBuf,
        language: Option<String>,
        kind: AnalysisKind,
        config_path: Option<PathBuf>,
    ) -> CodeQualityResult<()> {
        log::info!("🔍 Starting {} analysis of {}", kind, file.display());

        let config = Self::load_valid_config(config_path.as_deref())?;
        let code = fs::read_to_string(&file).map_err(|e| CodeQualityError::SystemError {
            operation: format!("read {}", file.display()),
            reason: e.to_string(),
        })?;

        let language = language.unwrap_or_else(|| {
            let detected = LanguageDetector::detect(&file, &code);
            log::info!("🔎 Detected language: {}", detected);
            detected.to_string()
        });

        let service = AnalysisService::from_config(&config)?;
        let outcome = service.analyze(&AnalysisRequest::new(code, language, kind)).await?;

        if outcome.fallback {
            log::warn!("⚠️ The report is a fallback result, see its diagnostics");
        }

        let rendered = serde_json::to_string_pretty(&outcome)?;
        println!("{}", rendered);

        Ok(())
    }

    fn validate_command(&self, config_path: Option<PathBuf>) -> CodeQualityResult<()> {
        log::info!("🔍 Validating codequal configuration...");

        let config = Self::load_valid_config(config_path.as_deref())?;
        log::info!("✅ Configuration is valid");

        match ConfigManager::api_key(&config.ai) {
            Ok(_) => log::info!("🔑 API key found in {}", config.ai.api_key_env),
            Err(_) => log::warn!("⚠️ {} is not set, 'serve' and 'analyze' will refuse to start", config.ai.api_key_env),
        }

        Ok(())
    }

    fn load_valid_config(path: Option<&Path>) -> CodeQualityResult<Config> {
        let config = match ConfigManager::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'codequal init' to create a configuration file.");
                return Err(e);
            }
        };

        if let Err(problems) = ConfigManager::validate_config(&config) {
            for problem in &problems {
                log::error!("   • {}", problem);
            }
            return Err(CodeQualityError::config_error(
                &format!("{} configuration problem(s) found", problems.len()),
                None,
                Some("Fix the listed fields and run 'codequal validate' again"),
            ));
        }

        Ok(config)
    }
}
