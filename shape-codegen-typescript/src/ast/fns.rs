//! TypeScript function builder.

use shapegen_codegen::builder::CodeStream;

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            default: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Default value expression (`params: T = {}`).
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Builder for TypeScript function declarations.
///
/// The body is written by a closure so that synthesis errors raised while
/// emitting it propagate through [`Fn::write`].
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    exported: bool,
    generics: Vec<String>,
    params: Vec<Param>,
    return_type: Option<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            generics: Vec::new(),
            params: Vec::new(),
            return_type: None,
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Add a type parameter (`function f<T>()`).
    pub fn generic(mut self, name: impl Into<String>) -> Self {
        self.generics.push(name.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// The declaration line, up to and including the opening brace.
    pub fn signature(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };

        let params_str = self
            .params
            .iter()
            .map(|p| {
                let optional = if p.optional { "?" } else { "" };
                match &p.default {
                    Some(value) => format!("{}{}: {} = {}", p.name, optional, p.ty, value),
                    None => format!("{}{}: {}", p.name, optional, p.ty),
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "{}function {}{}({}): {} {{",
                export, self.name, generics, params_str, ret
            ),
            None => format!("{}function {}{}({}) {{", export, self.name, generics, params_str),
        }
    }

    /// Write the function, running `body` one level deeper.
    pub fn write<R>(&self, out: &mut CodeStream, body: impl FnOnce(&mut CodeStream) -> R) -> R {
        out.write_block(&format!("{}\n", self.signature()), body, "}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        assert_eq!(Fn::new("greet").signature(), "export function greet() {");
    }

    #[test]
    fn test_factory_signature() {
        let f = Fn::new("createIUser")
            .param(Param::new("params", "Partial<IUser>").default("{}"))
            .returns("IUser");
        assert_eq!(
            f.signature(),
            "export function createIUser(params: Partial<IUser> = {}): IUser {"
        );
    }

    #[test]
    fn test_private_generic_fn() {
        let f = Fn::new("validateVector")
            .private()
            .generic("T")
            .param(Param::new("value", "unknown"))
            .returns("value is T[]");
        assert_eq!(
            f.signature(),
            "function validateVector<T>(value: unknown): value is T[] {"
        );
    }

    #[test]
    fn test_fn_with_optional_param() {
        let f = Fn::new("greet").param(Param::new("name", "string").optional());
        assert_eq!(f.signature(), "export function greet(name?: string) {");
    }

    #[test]
    fn test_write_body() {
        let mut out = CodeStream::default();
        Fn::new("answer").returns("number").write(&mut out, |out| {
            out.write("return 42;\n");
        });
        assert_eq!(
            out.value(),
            "export function answer(): number {\n    return 42;\n}\n"
        );
    }
}
