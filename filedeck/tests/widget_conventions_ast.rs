use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::visit::Visit;
use syn::{Attribute, ExprMethodCall, Item, UseTree, Visibility};

const REQUIRED_WIDGET_FILES: [&str; 5] =
    ["mod.rs", "event.rs", "model.rs", "reducer.rs", "state.rs"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared_modules.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be \
                     pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }
    }

    let fs_modules = child_dirs(&widgets_dir);
    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        validate_widget_dir(&widgets_dir.join(module), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(dir: &Path, violations: &mut Vec<String>) {
    for required in REQUIRED_WIDGET_FILES {
        if !dir.join(required).is_file() {
            violations.push(format!("{}: missing {required}", dir.display()));
        }
    }

    let reducer = dir.join("reducer.rs");
    if reducer.is_file() {
        validate_reducer(&reducer, violations);
    }

    let view_dir = dir.join("view");
    if !view_dir.join("mod.rs").is_file() {
        violations.push(format!("{}: missing view/mod.rs", dir.display()));
        return;
    }
    for file in rust_files(&view_dir) {
        validate_view_file(&file, violations);
    }
}

fn validate_reducer(file_path: &Path, violations: &mut Vec<String>) {
    let file = parse(file_path);
    let mut finder = PanicFinder::default();
    for item in &file.items {
        if is_test_module(item) {
            continue;
        }
        finder.visit_item(item);
    }

    for method in finder.found {
        violations.push(format!(
            "{}: .{method}() is forbidden outside tests",
            file_path.display()
        ));
    }
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    let file = parse(file_path);
    let expected_prefix = file_stem_pascal_case(file_path);

    for forbidden in [
        "crate::app::",
        "crate::state::",
        "crate::routers::",
        "log::",
        "std::fs::",
        "Task::",
        "iced::Task",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden pattern in view: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Use(item_use) => {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        file_path.display()
                    ));
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if name != format!("{expected_prefix}Props") {
            violations.push(format!(
                "{}: props type '{name}' must be named \
                 '{expected_prefix}Props'",
                file_path.display()
            ));
        }
    }
}

#[derive(Default)]
struct PanicFinder {
    found: Vec<String>,
}

impl<'ast> Visit<'ast> for PanicFinder {
    fn visit_expr_method_call(&mut self, call: &'ast ExprMethodCall) {
        let method = call.method.to_string();
        if method == "unwrap" || method == "expect" {
            self.found.push(method);
        }
        syn::visit::visit_expr_method_call(self, call);
    }
}

fn is_test_module(item: &Item) -> bool {
    match item {
        Item::Mod(item_mod) => item_mod.attrs.iter().any(is_cfg_test),
        _ => false,
    }
}

fn is_cfg_test(attr: &Attribute) -> bool {
    if !attr.path().is_ident("cfg") {
        return false;
    }
    attr.parse_args::<syn::Ident>()
        .map(|ident| ident == "test")
        .unwrap_or(false)
}

fn parse(file_path: &Path) -> syn::File {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    })
}

fn child_dirs(dir: &Path) -> BTreeSet<String> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    let mut dirs = BTreeSet::new();
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        if entry.path().is_dir() {
            dirs.insert(entry.file_name().to_string_lossy().to_string());
        }
    }
    dirs
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        let is_rust = path.extension().is_some_and(|ext| ext == "rs");
        let is_mod = path.file_name().is_some_and(|name| name == "mod.rs");
        if is_rust && !is_mod {
            files.push(path);
        }
    }
    files.sort();
    files
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&stem)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
