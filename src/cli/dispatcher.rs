use crate::api::client_ip::{headers_from_lines, resolve_client_ip};
use crate::cli::main_types::{Commands, ConfigCommands, FqdnFlags};
use crate::display::{FqdnRow, SizeRow, TableDisplay};
use crate::error::{AppError, CliError, DisplayError, UtilsError};
use crate::storage::config::Config;
use crate::utils::data::{array_difference, array_merge, is_empty};
use crate::utils::size::{iec_to_num, num_to_iec};
use crate::utils::text::{from_hex, text_decode, text_decode_strict, text_encode, to_hex};
use crate::utils::validation::{FqdnOptions, is_with_line_break, validate_fqdn};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Remote host reported when neither `--remote-host` nor the config supplies one
pub const UNKNOWN_REMOTE_HOST: &str = "unknown";

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    table: TableDisplay,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>, use_colors: bool) -> Self {
        Self {
            config,
            config_path,
            table: TableDisplay::new().with_colors(use_colors),
        }
    }

    pub fn dispatch(&self, command: Commands, out: &mut dyn Write) -> Result<(), AppError> {
        match command {
            Commands::Fqdn { names, flags } => self.handle_fqdn(&names, flags, out),
            Commands::Iec { values, to_iec } => self.handle_iec(&values, to_iec, out),
            Commands::ClientIp {
                headers,
                remote_host,
                explain,
            } => self.handle_client_ip(&headers, remote_host, explain, out),
            Commands::LineBreak { text } => {
                write_line(out, &is_with_line_break(Some(text.as_str())).to_string())
            }
            Commands::Empty { json } => {
                let value: serde_json::Value =
                    serde_json::from_str(&json).map_err(|e| CliError::InvalidJson {
                        message: e.to_string(),
                    })?;
                write_line(out, &is_empty(&value).to_string())
            }
            Commands::Diff { base, other } => {
                let result = array_difference(&split_list(&base), &split_list(&other));
                write_line(out, &result.join(","))
            }
            Commands::Merge { first, second } => {
                let result = array_merge(&split_list(&first), &split_list(&second));
                write_line(out, &result.join(","))
            }
            Commands::Encode { text } => write_line(out, &to_hex(&text_encode(&text))),
            Commands::Decode { hex, lossy } => {
                let bytes = from_hex(&hex)?;
                let text = if lossy {
                    text_decode(&bytes)
                } else {
                    text_decode_strict(&bytes)?
                };
                write_line(out, &text)
            }
            Commands::Config { command } => self.handle_config_command(command, out),
        }
    }

    fn handle_fqdn(
        &self,
        names: &[String],
        flags: FqdnFlags,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let options = self.config.fqdn.union(FqdnOptions::from(flags));
        debug!(?options, "validating {} domain name(s)", names.len());

        let rows: Vec<FqdnRow> = names
            .iter()
            .map(|name| FqdnRow {
                name: name.clone(),
                outcome: validate_fqdn(name, &options),
            })
            .collect();

        write_line(out, &self.table.render_fqdn_results(&rows))?;

        let failed = rows.iter().filter(|row| row.outcome.is_err()).count();
        if failed > 0 {
            return Err(CliError::ValidationFailed { count: failed }.into());
        }
        Ok(())
    }

    fn handle_iec(
        &self,
        values: &[String],
        to_iec: bool,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let rows = values
            .iter()
            .map(|value| -> Result<SizeRow, AppError> {
                let output = if to_iec {
                    let number = value.trim().parse::<f64>().map_err(|_| {
                        UtilsError::Validation {
                            message: format!("'{}' is not a number", value),
                        }
                    })?;
                    num_to_iec(number)
                } else {
                    iec_to_num(value).to_string()
                };
                Ok(SizeRow {
                    input: value.clone(),
                    output,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let header = if to_iec { "IEC" } else { "Bytes" };
        write_line(out, &self.table.render_sizes(&rows, header))
    }

    fn handle_client_ip(
        &self,
        header_lines: &[String],
        remote_host: Option<String>,
        explain: bool,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let headers = headers_from_lines(header_lines)?;
        let remote_host = remote_host
            .or_else(|| self.config.client_ip.default_remote_host.clone())
            .unwrap_or_else(|| UNKNOWN_REMOTE_HOST.to_string());

        let resolved = resolve_client_ip(&headers, &remote_host);
        if explain {
            write_line(out, &format!("{} (from {})", resolved.value, resolved.source))
        } else {
            write_line(out, &resolved.value)
        }
    }

    fn handle_config_command(
        &self,
        command: ConfigCommands,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => write_line(out, self.config.to_toml()?.trim_end()),
            ConfigCommands::Init { force } => {
                let path = self.config_path.clone().ok_or_else(|| {
                    CliError::InvalidArguments(
                        "no configuration directory found; pass --config-dir".to_string(),
                    )
                })?;

                if path.exists() && !force {
                    return Err(CliError::InvalidArguments(format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    ))
                    .into());
                }

                Config::default().save(Some(path.clone()))?;
                write_line(out, &format!("Wrote {}", path.display()))
            }
        }
    }
}

/// Split a comma-separated list, trimming items and dropping empty ones
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn write_line(out: &mut dyn Write, text: &str) -> Result<(), AppError> {
    writeln!(out, "{}", text)
        .map_err(|e| DisplayError::TerminalOutput(format!("write: {}", e)).into())
}

/// Flush buffered command output, surfacing failures such as a closed pipe
pub fn flush_output(out: &mut dyn Write) -> Result<(), AppError> {
    out.flush()
        .map_err(|e| DisplayError::TerminalOutput(format!("flush: {}", e)).into())
}
