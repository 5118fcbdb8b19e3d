use std::str::FromStr;

/// The identifier generated loaders and actions use for an imported client.
pub const CLIENT_BINDING: &str = "urqlClient";

/// Whether loader/action pairs are generated, and where their urql client
/// comes from.
///
/// Deserializes from the `withLoaders` config value: `false`, `true`, or a
/// `"<module>#<exportName>"` string naming a module that exports a
/// request-bound client.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(from = "RawLoaderMode")]
pub enum LoaderMode {
    /// Loaders read the client from `args.context.urqlClient`.
    ContextClient,

    #[default]
    Disabled,

    /// Loaders use a client imported once at the top of the module.
    ExternalClient(ClientImport),
}
impl LoaderMode {
    pub fn client_import(&self) -> Option<&ClientImport> {
        if let Self::ExternalClient(import) = self {
            Some(import)
        } else {
            None
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Shared by config strings and CLI values. `"true"`/`"false"` are flags;
    /// an empty value or a reference without a module disables loaders.
    fn from_source(source: &str) -> Self {
        match source.trim() {
            "true" => Self::ContextClient,
            "false" | "" => Self::Disabled,
            source => {
                let import = ClientImport::parse(source);
                if import.module().is_empty() {
                    Self::Disabled
                } else {
                    Self::ExternalClient(import)
                }
            },
        }
    }
}
impl From<RawLoaderMode> for LoaderMode {
    fn from(raw: RawLoaderMode) -> Self {
        match raw {
            RawLoaderMode::Flag(true) => Self::ContextClient,
            RawLoaderMode::Flag(false) => Self::Disabled,
            RawLoaderMode::Source(source) => Self::from_source(source.as_str()),
        }
    }
}
impl FromStr for LoaderMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_source(s))
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawLoaderMode {
    Flag(bool),
    Source(String),
}

/// A `"<module>#<exportName>"` reference to an externally provided client.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientImport {
    pub(crate) export_name: String,
    pub(crate) module: String,
}
impl ClientImport {
    /// Splits on the first `#`. A missing or empty export name means the
    /// module's default export.
    pub fn parse(source: &str) -> Self {
        let (module, export_name) = match source.split_once('#') {
            Some((module, export_name)) if !export_name.is_empty() =>
                (module, export_name),
            Some((module, _)) => (module, "default"),
            None => (source, "default"),
        };
        Self {
            export_name: export_name.to_string(),
            module: module.to_string(),
        }
    }

    pub fn export_name(&self) -> &str {
        self.export_name.as_str()
    }

    pub fn module(&self) -> &str {
        self.module.as_str()
    }

    pub fn to_import_statement(&self) -> String {
        if self.export_name == "default" {
            format!("import {CLIENT_BINDING} from '{}';", self.module)
        } else {
            format!(
                "import {{ {} as {CLIENT_BINDING} }} from '{}';",
                self.export_name,
                self.module,
            )
        }
    }
}
