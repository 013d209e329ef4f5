use reflectscope_api::ReflectiveClass;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// A terminal view of one reflection requirement
#[derive(Tabled)]
pub struct RequirementView {
    pub class: String,
    pub methods: String,
    pub fields: String,
}

impl From<&ReflectiveClass> for RequirementView {
    fn from(record: &ReflectiveClass) -> Self {
        Self {
            class: record.class_name.clone(),
            methods: yes_no(record.methods),
            fields: yes_no(record.fields),
        }
    }
}

fn yes_no(flag: bool) -> String {
    let label = if flag { "yes" } else { "no" };
    label.to_string()
}

pub fn render(
    records: &[ReflectiveClass],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(records),
        OutputFormat::Table => {
            let views: Vec<RequirementView> = records.iter().map(RequirementView::from).collect();
            Ok(Table::new(&views).with(Style::psql()).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ReflectiveClass> {
        vec![
            ReflectiveClass::new("com.acme.Widget", true, false),
            ReflectiveClass::new("com.acme.Gadget", true, true),
        ]
    }

    #[test]
    fn json_output_is_a_record_array() {
        let out = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: Vec<ReflectiveClass> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, sample());
        assert!(out.contains("\"className\""));
    }

    #[test]
    fn table_output_lists_every_class() {
        let out = render(&sample(), OutputFormat::Table).unwrap();
        assert!(out.contains("com.acme.Widget"));
        assert!(out.contains("com.acme.Gadget"));
        assert!(out.contains("methods"));
    }

    #[test]
    fn empty_json_is_empty_array() {
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]");
    }
}
