use std::time::Duration;

use clap::{Args as ClapArgs, Parser, ValueEnum};
use menuforge_core::domain::common::{LLMConfig, LLMProviderKind, MenuforgeConfig, RateLimitConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "menuforge", version, about = "Family meal planning API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub rate_limit: RateLimitArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProviderArg {
    Gemini,
    Openai,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", value_enum, default_value_t = LlmProviderArg::Gemini)]
    pub provider: LlmProviderArg,

    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub openai_api_key: String,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub openai_model: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long = "llm-max-tokens", env = "LLM_MAX_TOKENS", default_value_t = 8000)]
    pub max_tokens: u32,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.7)]
    pub temperature: f32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RateLimitArgs {
    #[arg(long = "rate-limit-window-secs", env = "RATE_LIMIT_WINDOW_SECS", default_value_t = 3600)]
    pub window_secs: u64,

    #[arg(long = "menu-generations-per-window", env = "MENU_GENERATIONS_PER_WINDOW", default_value_t = 10)]
    pub menu_generations_per_window: u32,

    #[arg(long = "alternatives-per-window", env = "ALTERNATIVES_PER_WINDOW", default_value_t = 30)]
    pub alternatives_per_window: u32,
}

impl From<Args> for MenuforgeConfig {
    fn from(args: Args) -> Self {
        MenuforgeConfig {
            llm: LLMConfig {
                provider: match args.llm.provider {
                    LlmProviderArg::Gemini => LLMProviderKind::Gemini,
                    LlmProviderArg::Openai => LLMProviderKind::OpenAi,
                },
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                openai_api_key: args.llm.openai_api_key,
                openai_model: args.llm.openai_model,
                request_timeout: Duration::from_secs(args.llm.timeout_secs),
                max_tokens: args.llm.max_tokens,
                temperature: args.llm.temperature,
            },
            rate_limit: RateLimitConfig {
                window: Duration::from_secs(args.rate_limit.window_secs),
                menu_generations_per_window: args.rate_limit.menu_generations_per_window,
                alternatives_per_window: args.rate_limit.alternatives_per_window,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["menuforge"]);

        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.allowed_origins, vec!["http://localhost:3000".to_string()]);
        assert_eq!(args.llm.provider, LlmProviderArg::Gemini);

        let config = MenuforgeConfig::from(args);
        assert_eq!(config.llm.request_timeout, Duration::from_secs(30));
        assert_eq!(config.llm.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.rate_limit.menu_generations_per_window, 10);
        assert_eq!(config.rate_limit.alternatives_per_window, 30);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "menuforge",
            "--llm-provider",
            "openai",
            "--allowed-origins",
            "https://a.example,https://b.example",
            "--llm-timeout-secs",
            "45",
        ]);

        assert_eq!(args.server.allowed_origins.len(), 2);
        let config = MenuforgeConfig::from(args);
        assert_eq!(config.llm.provider, LLMProviderKind::OpenAi);
        assert_eq!(config.llm.request_timeout, Duration::from_secs(45));
    }
}
