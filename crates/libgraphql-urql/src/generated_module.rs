/// The output of one generation run: the module's imports followed by the
/// artifacts of each operation, in input order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GeneratedModule {
    pub(crate) imports: Vec<String>,
    pub(crate) operations: Vec<String>,
}
impl GeneratedModule {
    pub fn imports(&self) -> &[String] {
        self.imports.as_slice()
    }

    /// One joined text block per input operation. Blocks are empty for
    /// operations that produced no artifacts.
    pub fn operations(&self) -> &[String] {
        self.operations.as_slice()
    }

    /// The complete module text: imports one per line, then a blank line,
    /// then the non-empty operation blocks separated by blank lines.
    pub fn render(&self) -> String {
        let body: Vec<&str> = self.operations.iter()
            .map(String::as_str)
            .filter(|block| !block.is_empty())
            .collect();

        let mut text = self.imports.join("\n");
        if !text.is_empty() && !body.is_empty() {
            text.push_str("\n\n");
        }
        text.push_str(body.join("\n\n").as_str());
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }
}
