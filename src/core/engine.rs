use crate::core::custom_power::CustomPower;
use crate::core::format::format_fixed6;
use crate::core::parse::parse_lenient;
use crate::core::std_power::StdPower;
use crate::core::{Backend, ConfigProvider, PowerOutcome, PowerRequest, PowerStrategy};
use crate::utils::error::{PowError, Result};

pub fn strategy_for(backend: Backend) -> Box<dyn PowerStrategy> {
    match backend {
        Backend::Std => Box::new(StdPower),
        Backend::Custom => Box::new(CustomPower),
    }
}

pub struct PowerEngine {
    strategy: Box<dyn PowerStrategy>,
    backend: Backend,
}

impl PowerEngine {
    pub fn new(backend: Backend) -> Self {
        Self {
            strategy: strategy_for(backend),
            backend,
        }
    }

    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self::new(config.backend())
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn compute(&self, base_arg: &str, power_arg: &str) -> PowerOutcome {
        let request = PowerRequest {
            base_arg: base_arg.to_string(),
            power_arg: power_arg.to_string(),
            base: parse_lenient(base_arg),
            power: parse_lenient(power_arg),
        };

        tracing::debug!(
            "Computing {} ^ {} with {} backend",
            request.base,
            request.power,
            self.strategy.name()
        );
        let result = self.strategy.power(request.base, request.power);
        tracing::debug!("Result: {}", result);

        PowerOutcome {
            request,
            result,
            backend: self.backend,
        }
    }

    /// Takes the positional arguments (without the program name) and returns
    /// the line to print. Arguments past the second are ignored.
    pub fn run(&self, program: &str, args: &[String]) -> Result<String> {
        match args {
            [base_arg, power_arg, rest @ ..] => {
                if !rest.is_empty() {
                    tracing::debug!("Ignoring {} extra argument(s)", rest.len());
                }
                Ok(render(&self.compute(base_arg, power_arg)))
            }
            _ => Err(PowError::UsageError {
                program: program.to_string(),
            }),
        }
    }
}

pub fn render(outcome: &PowerOutcome) -> String {
    format!(
        "{} ^ {} = {}",
        outcome.request.base_arg,
        outcome.request.power_arg,
        format_fixed6(outcome.result)
    )
}
