/// How per-component configuration statements are scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// `name = new View(context);` followed by `name.setX(1f);`
    Receiver,
    /// `name = View(context).apply { x = 1f }`
    ApplyBlock,
}

/// Syntax descriptor for an imperative construction dialect.
///
/// The emitter owns traversal and every decision about what to emit; a
/// dialect only says how each piece is spelled.
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    pub name: &'static str,
    pub file_extension: &'static str,
    pub terminator: &'static str,
    pub new_keyword: &'static str,
    pub scope: ConfigScope,
    pub imports: &'static [&'static str],
    pub class_open: fn(class_name: &str) -> String,
    pub field_decl: fn(name: &str, ty: &str) -> String,
    pub routine_open: fn(class_name: &str) -> String,
    pub root_accessor: fn(ty: &str, name: &str) -> String,
    pub fallback: fn(package_name: &str, class_name: &str) -> String,
    pub escape: fn(text: &str) -> String,
}

impl Dialect {
    pub const JAVA: Dialect = Dialect {
        name: "java",
        file_extension: "java",
        terminator: ";",
        new_keyword: "new ",
        scope: ConfigScope::Receiver,
        imports: &[
            "android.content.Context",
            "android.graphics.Color",
            "android.view.View",
            "android.view.ViewGroup",
            "android.widget.*",
            "androidx.annotation.NonNull",
        ],
        class_open: java_class_open,
        field_decl: java_field_decl,
        routine_open: java_routine_open,
        root_accessor: java_root_accessor,
        fallback: java_fallback,
        escape: escape_java,
    };

    pub const KOTLIN: Dialect = Dialect {
        name: "kotlin",
        file_extension: "kt",
        terminator: "",
        new_keyword: "",
        scope: ConfigScope::ApplyBlock,
        imports: &[
            "android.content.Context",
            "android.graphics.Color",
            "android.view.View",
            "android.view.ViewGroup",
            "android.widget.*",
        ],
        class_open: kotlin_class_open,
        field_decl: kotlin_field_decl,
        routine_open: kotlin_routine_open,
        root_accessor: kotlin_root_accessor,
        fallback: kotlin_fallback,
        escape: escape_kotlin,
    };

    /// Looks a dialect up by name or file extension.
    pub fn by_name(name: &str) -> Option<&'static Dialect> {
        match name.to_ascii_lowercase().as_str() {
            "java" => Some(&Self::JAVA),
            "kotlin" | "kt" => Some(&Self::KOTLIN),
            _ => None,
        }
    }

    pub fn string_literal(&self, text: &str) -> String {
        format!("\"{}\"", (self.escape)(text))
    }
}

fn java_class_open(class_name: &str) -> String {
    format!("public class {} {{\n\n", class_name)
}

fn java_field_decl(name: &str, ty: &str) -> String {
    format!("    private {} {};\n", ty, name)
}

fn java_routine_open(class_name: &str) -> String {
    format!(
        "    public {}(@NonNull Context context) {{\n\
         \x20       createViews(context);\n\
         \x20   }}\n\n\
         \x20   private void createViews(@NonNull Context context) {{\n",
        class_name
    )
}

fn java_root_accessor(ty: &str, name: &str) -> String {
    format!(
        "    public {} getRootView() {{\n        return {};\n    }}\n",
        ty, name
    )
}

fn java_fallback(package_name: &str, class_name: &str) -> String {
    format!(
        "package {package};\n\n\
         import android.content.Context;\n\
         import android.widget.FrameLayout;\n\n\
         public class {class} {{\n\
         \x20   private final FrameLayout rootView;\n\n\
         \x20   public {class}(Context context) {{\n\
         \x20       rootView = new FrameLayout(context);\n\
         \x20   }}\n\n\
         \x20   public FrameLayout getRootView() {{\n\
         \x20       return rootView;\n\
         \x20   }}\n\
         }}\n",
        package = package_name,
        class = class_name
    )
}

fn kotlin_class_open(class_name: &str) -> String {
    format!("class {}(private val context: Context) {{\n\n", class_name)
}

fn kotlin_field_decl(name: &str, ty: &str) -> String {
    format!("    private lateinit var {}: {}\n", name, ty)
}

fn kotlin_routine_open(_class_name: &str) -> String {
    "    init {\n        createViews()\n    }\n\n    private fun createViews() {\n".to_string()
}

fn kotlin_root_accessor(ty: &str, name: &str) -> String {
    format!("    fun getRootView(): {} = {}\n", ty, name)
}

fn kotlin_fallback(package_name: &str, class_name: &str) -> String {
    format!(
        "package {package}\n\n\
         import android.content.Context\n\
         import android.widget.FrameLayout\n\n\
         class {class}(context: Context) {{\n\
         \x20   private val rootView = FrameLayout(context)\n\n\
         \x20   fun getRootView(): FrameLayout = rootView\n\
         }}\n",
        package = package_name,
        class = class_name
    )
}

/// Escapes backslash, double quote and the common control characters.
pub fn escape_java(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Java escaping plus `$`, which starts a string template in Kotlin.
pub fn escape_kotlin(text: &str) -> String {
    escape_java(text).replace('$', "\\$")
}
