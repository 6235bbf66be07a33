use crate::cli::{Cli, OutputFormat};
use bon::Builder;
use casekit::{CliError, Converter, Error, Input};
use serde_json::Value;

#[derive(Debug, Clone, Builder)]
pub struct Configuration {
    pub converter: Converter,
    pub inputs: Vec<Input>,
    #[builder(default)]
    pub output: OutputFormat,
    #[builder(default)]
    pub verbose: bool,
}

impl Configuration {
    pub fn from_cli(cli: Cli) -> Result<Self, Error> {
        // --split-dots only ever turns splitting on; dot.case already splits
        let split_on_dots = cli.split_dots.then_some(true);

        let converter = Converter::builder()
            .style(cli.style)
            .maybe_policy(cli.policy)
            .maybe_split_on_dots(split_on_dots)
            .build();

        let inputs = if cli.json_input {
            cli.inputs
                .into_iter()
                .map(parse_json_input)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            cli.inputs.into_iter().map(Input::from).collect()
        };

        Ok(Configuration::builder()
            .converter(converter)
            .inputs(inputs)
            .output(cli.output)
            .verbose(cli.verbose)
            .build())
    }
}

fn parse_json_input(raw: String) -> Result<Input, CliError> {
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => Ok(Input::from(value)),
        Err(source) => Err(CliError::InvalidJsonInput { input: raw, source }),
    }
}
