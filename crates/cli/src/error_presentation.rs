use miette::Report;

const CONFIG_CONTEXT: &str = "while loading service configuration";
const ADAPTER_CONTEXT: &str = "while talking to xugu";

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    Config(xgbridge_config::ConfigError),
    Core(xgbridge_core::Error),
    NoNativeDriver,
}

impl From<xgbridge_config::ConfigError> for CliError {
    fn from(value: xgbridge_config::ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<xgbridge_core::Error> for CliError {
    fn from(value: xgbridge_core::Error) -> Self {
        Self::Core(value)
    }
}

pub fn render_runtime_error(error: CliError) -> String {
    match error {
        CliError::Config(source) => {
            let report = report_with_context(source, CONFIG_CONTEXT);
            format!("[config] {report}")
        }
        CliError::Core(source) => {
            let category = core_category(&source);
            let report = report_with_context(source, ADAPTER_CONTEXT);
            format!("[{category}] {report}")
        }
        CliError::NoNativeDriver => format!("[driver] {}", no_native_driver_message()),
    }
}

fn report_with_context<E, C>(source: E, context: C) -> Report
where
    E: std::error::Error + Send + Sync + 'static,
    C: Into<String>,
{
    let anyhow_error = anyhow::Error::new(source).context(context.into());
    miette::miette!("{anyhow_error:#}")
}

fn core_category(error: &xgbridge_core::Error) -> &'static str {
    match error {
        xgbridge_core::Error::Connect(_) => "connect",
        xgbridge_core::Error::Execute(_) => "execute",
        xgbridge_core::Error::Generate(_) => "generate",
        xgbridge_core::Error::Catalog(_) => "catalog",
    }
}

fn no_native_driver_message() -> &'static str {
    "no native xugu driver is compiled into this build; embed one through the xgbridge-core Driver trait"
}
