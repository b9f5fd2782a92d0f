//! Qualified-name resolution: rewrites parameter types to fully qualified class and enum
//! paths once the whole file has been assembled.
//!
//! Return types are left as written.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::warn;

use crate::core::data::{ClassModel, ModuleModel, SCOPE_SEPARATOR};

/// Rewrite every parameter type of every function and constructor in `model`.
///
/// Running this twice gives the same result as running it once.
pub fn resolve_qualified_names(model: &mut ModuleModel) {
    let table = TypeTable::build(&model.classes);

    for class in &mut model.classes {
        let sets = class.functions.iter_mut().chain(class.constructors.iter_mut());
        for overload in sets.flat_map(|set| set.overloads.iter_mut()) {
            for param in &mut overload.params {
                if let Some(resolved) = table.resolve_type(&param.ty) {
                    param.ty = resolved;
                }
            }
        }
    }
}

/// Lookup table from short or partially qualified names to full paths.
#[derive(Debug, Default)]
pub struct TypeTable {
    names: BTreeMap<String, String>,
    /// Every path the table can produce.
    targets: BTreeSet<String>,
}

impl TypeTable {
    pub fn build(classes: &[ClassModel]) -> Self {
        let mut table = Self::default();
        let mut full_paths = Vec::new();

        for class in classes {
            let path = class.qualified_name();
            table.insert(&class.emitted_name, &path);

            for e in &class.enums {
                let enum_path = join(&path, &e.emitted_name);
                table.insert(&e.emitted_name, &enum_path);
                table.insert(&join(&class.emitted_name, &e.emitted_name), &enum_path);
                if class.is_nested() {
                    let outer = class.outer_class.replace('.', SCOPE_SEPARATOR);
                    let scoped = join(&join(&outer, &class.name), &e.emitted_name);
                    table.insert(&scoped, &enum_path);
                }
                full_paths.push(enum_path);
            }

            for inner in classes.iter().filter(|c| c.outer_emitted_name == path) {
                table.insert(
                    &join(&class.emitted_name, &inner.emitted_name),
                    &inner.qualified_name(),
                );
            }

            full_paths.push(path);
        }

        // Full paths always map to themselves.
        let mut seen = HashSet::new();
        for path in full_paths {
            if !seen.insert(path.clone()) {
                warn!(path = %path, "duplicate type path, entries share one name");
            }
            table.insert(&path, &path);
        }

        // Aliases resolve once against classes and enums, never through other aliases.
        let mut aliases = Vec::new();
        for class in classes {
            for (alias, target) in &class.aliases {
                let resolved = table.lookup(target).unwrap_or_else(|| target.clone());
                aliases.push((alias.clone(), resolved));
            }
        }
        for (alias, resolved) in aliases {
            table.targets.insert(resolved.clone());
            table.names.entry(alias).or_insert(resolved);
        }

        table
    }

    fn insert(&mut self, name: &str, path: &str) {
        self.names.insert(name.to_string(), path.to_string());
        self.targets.insert(path.to_string());
    }

    /// Full path for a bare type name (no qualifiers or pointer/reference suffix).
    ///
    /// Exact entries win. Otherwise the name's last segment is matched against the last
    /// segment of every known path, and the requested scope (if any) must match the end
    /// of the candidate's scope. Ties go to the shortest path, then the smallest one.
    pub fn lookup(&self, name: &str) -> Option<String> {
        if let Some(path) = self.names.get(name) {
            return Some(path.clone());
        }
        if self.targets.contains(name) {
            return Some(name.to_string());
        }

        let (scope, base) = split_qualified(name);
        self.targets
            .iter()
            .filter(|target| {
                let (target_scope, target_base) = split_qualified(target);
                target_base == base && scope_matches(target_scope, scope)
            })
            .min_by_key(|target| (target.split(SCOPE_SEPARATOR).count(), target.as_str()))
            .cloned()
    }

    /// Rewrite one parameter type, keeping a leading `const` and any trailing `&`/`*`.
    ///
    /// Returns `None` when nothing changes.
    pub fn resolve_type(&self, ty: &str) -> Option<String> {
        let trimmed = ty.trim();
        let (prefix, rest) = match trimmed.strip_prefix("const ") {
            Some(rest) => ("const ", rest),
            None => ("", trimmed),
        };
        let end = rest.find(['&', '*']).unwrap_or(rest.len());
        let core = rest[..end].trim();
        if core.is_empty() {
            return None;
        }

        let resolved = self.lookup(core)?;
        let suffix = &rest[rest[..end].trim_end().len()..];
        let rewritten = format!("{prefix}{resolved}{suffix}");
        (rewritten != ty).then_some(rewritten)
    }
}

fn join(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}{SCOPE_SEPARATOR}{name}")
    }
}

/// `a::b::C` -> (`a::b`, `C`)
fn split_qualified(name: &str) -> (&str, &str) {
    match name.rfind(SCOPE_SEPARATOR) {
        Some(pos) => (&name[..pos], &name[pos + SCOPE_SEPARATOR.len()..]),
        None => ("", name),
    }
}

/// An empty request matches any scope; otherwise it must end `full` on a `::` boundary.
fn scope_matches(full: &str, requested: &str) -> bool {
    requested.is_empty()
        || full == requested
        || full
            .strip_suffix(requested)
            .is_some_and(|head| head.ends_with(SCOPE_SEPARATOR))
}
