use crate::utils::validation::FqdnError;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};

/// Outcome of checking one domain name, as shown by `edgekit fqdn`
#[derive(Debug, Clone)]
pub struct FqdnRow {
    pub name: String,
    pub outcome: Result<(), FqdnError>,
}

/// One converted size, as shown by `edgekit iec`
#[derive(Debug, Clone)]
pub struct SizeRow {
    pub input: String,
    pub output: String,
}

/// Formatter for the command-line tables
#[derive(Debug, Clone)]
pub struct TableDisplay {
    max_width: Option<u16>,
    use_colors: bool,
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: None,
            use_colors: true,
        }
    }

    pub fn with_max_width(mut self, width: u16) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn render_fqdn_results(&self, rows: &[FqdnRow]) -> String {
        let mut table = self.base_table(&["Name", "Valid", "Reason"]);

        for row in rows {
            let (verdict, reason) = match &row.outcome {
                Ok(()) => (self.colored("yes", Color::Green), Cell::new("")),
                Err(err) => (
                    self.colored("no", Color::Red),
                    self.colored(&err.to_string(), Color::DarkGrey),
                ),
            };
            table.add_row(vec![Cell::new(&row.name), verdict, reason]);
        }

        table.to_string()
    }

    pub fn render_sizes(&self, rows: &[SizeRow], output_header: &str) -> String {
        let mut table = self.base_table(&["Input", output_header]);

        for row in rows {
            table.add_row(vec![
                Cell::new(&row.input),
                self.colored(&row.output, Color::Cyan),
            ]);
        }

        table.to_string()
    }

    fn base_table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        if self.use_colors {
            table.set_header(headers.iter().map(|header| {
                Cell::new(header)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }));
        } else {
            table.set_header(headers.to_vec());
        }

        table
    }

    fn colored(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(color)
        } else {
            Cell::new(text)
        }
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TableDisplay {
        TableDisplay::new().with_colors(false)
    }

    #[test]
    fn test_render_fqdn_results() {
        let rows = vec![
            FqdnRow {
                name: "example.com".to_string(),
                outcome: Ok(()),
            },
            FqdnRow {
                name: "-bad-.com".to_string(),
                outcome: Err(FqdnError::HyphenBoundary {
                    label: "-bad-".to_string(),
                }),
            },
        ];

        let output = plain().render_fqdn_results(&rows);
        assert!(output.contains("Name"));
        assert!(output.contains("example.com"));
        assert!(output.contains("yes"));
        assert!(output.contains("no"));
        assert!(output.contains("starts or ends with a hyphen"));
    }

    #[test]
    fn test_render_sizes() {
        let rows = vec![SizeRow {
            input: "1K".to_string(),
            output: "1024".to_string(),
        }];

        let output = plain().render_sizes(&rows, "Bytes");
        assert!(output.contains("Input"));
        assert!(output.contains("Bytes"));
        assert!(output.contains("1024"));
    }

    #[test]
    fn test_render_with_max_width() {
        let rows = vec![FqdnRow {
            name: "example.com".to_string(),
            outcome: Ok(()),
        }];
        let output = plain().with_max_width(60).render_fqdn_results(&rows);
        assert!(output.lines().all(|line| line.chars().count() <= 60));
    }
}
