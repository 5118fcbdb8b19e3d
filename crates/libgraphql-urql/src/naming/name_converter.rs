use crate::ConvertNameOptions;
use crate::NameResolver;
use crate::NamingConvention;
use crate::OperationKind;
use inherent::inherent;

/// The stock [`NameResolver`]: applies a [`NamingConvention`], the optional
/// types prefix/suffix and the operation-suffix rules.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NameConverter {
    pub(crate) convention: NamingConvention,
    pub(crate) dedupe_operation_suffix: bool,
    pub(crate) document_variable_prefix: String,
    pub(crate) document_variable_suffix: String,
    pub(crate) omit_operation_suffix: bool,
    pub(crate) types_prefix: String,
    pub(crate) types_suffix: String,
}
impl NameConverter {
    pub fn new(convention: NamingConvention) -> Self {
        Self {
            convention,
            document_variable_suffix: "Document".to_string(),
            ..Default::default()
        }
    }

    pub fn with_dedupe_operation_suffix(mut self, dedupe: bool) -> Self {
        self.dedupe_operation_suffix = dedupe;
        self
    }

    pub fn with_document_variable_affixes(
        mut self,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        self.document_variable_prefix = prefix.into();
        self.document_variable_suffix = suffix.into();
        self
    }

    pub fn with_omit_operation_suffix(mut self, omit: bool) -> Self {
        self.omit_operation_suffix = omit;
        self
    }

    pub fn with_types_affixes(
        mut self,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        self.types_prefix = prefix.into();
        self.types_suffix = suffix.into();
        self
    }
}

#[inherent]
impl NameResolver for NameConverter {
    pub fn convert_name(
        &self,
        raw: &str,
        options: &ConvertNameOptions<'_>,
    ) -> String {
        let mut name = String::new();
        if options.use_types_prefix {
            name.push_str(self.types_prefix.as_str());
        }
        name.push_str(self.convention.apply(raw).as_str());
        name.push_str(options.suffix);
        if options.use_types_prefix {
            name.push_str(self.types_suffix.as_str());
        }
        to_valid_identifier(name)
    }

    pub fn document_variable_name(&self, raw: &str) -> String {
        to_valid_identifier(format!(
            "{}{}{}",
            self.document_variable_prefix,
            self.convention.apply(raw),
            self.document_variable_suffix,
        ))
    }

    pub fn operation_suffix(&self, raw: &str, kind: OperationKind) -> String {
        let suffix = kind.suffix();
        if self.omit_operation_suffix {
            return String::new();
        }
        if self.dedupe_operation_suffix
            && raw.to_lowercase().ends_with(&suffix.to_lowercase()) {
            return String::new();
        }
        suffix.to_string()
    }
}

fn to_valid_identifier(name: String) -> String {
    match name.chars().next() {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{name}"),
        Some(_) => name,
    }
}
