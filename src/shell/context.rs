use crate::shell::commands::Executable;

/// The built-in registry, in lookup order.
///
/// Filled once at startup; the interpreter only ever holds it by shared
/// reference afterwards.
pub struct ShellContext {
    registry: Vec<(&'static str, Box<dyn Executable>)>,
}

impl ShellContext {
    pub fn new() -> Self {
        let mut ctx = Self::empty();
        crate::shell::commands::builtins::register_all_builtins(&mut ctx);
        ctx
    }

    pub fn empty() -> Self {
        Self { registry: Vec::new() }
    }

    pub fn register_command(&mut self, name: &'static str, command: Box<dyn Executable>) {
        self.registry.push((name, command));
    }

    /// First built-in whose name is exactly `name`.
    pub fn lookup(&self, name: &[u8]) -> Option<&dyn Executable> {
        self.registry
            .iter()
            .find(|(n, _)| n.as_bytes() == name)
            .map(|(_, cmd)| cmd.as_ref())
    }

    pub fn builtin_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registry.iter().map(|(n, _)| *n)
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}
