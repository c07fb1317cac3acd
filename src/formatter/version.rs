use crate::domain::VersionInformation;

/// Expands a version template such as `{major}.{minor}.{patch}+{increment}`
#[derive(Debug, Clone)]
pub struct VersionFormatter {
    template: String,
}

impl VersionFormatter {
    pub fn new(template: impl Into<String>) -> Self {
        VersionFormatter {
            template: template.into(),
        }
    }

    pub fn format(&self, info: &VersionInformation) -> String {
        let values = [
            ("major", info.major),
            ("minor", info.minor),
            ("patch", info.patch),
            ("increment", info.increment),
        ];

        // `${name}` first so the `{name}` pass does not leave a stray `$`
        values
            .iter()
            .fold(self.template.clone(), |out, (name, value)| {
                let value = value.to_string();
                out.replace(&format!("${{{}}}", name), &value)
                    .replace(&format!("{{{}}}", name), &value)
            })
    }
}

impl Default for VersionFormatter {
    fn default() -> Self {
        VersionFormatter::new("{major}.{minor}.{patch}")
    }
}
