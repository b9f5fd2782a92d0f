//! The assembled symbol model handed to downstream generators.
//!
//! Entities are created by the assembler, extended while their class is still open, and
//! only have their parameter types rewritten by the resolver afterwards. Cross references
//! (property getter/setter) are indices into the owning class's `functions` vector.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Scope separator of the target language, used for emitted paths.
pub const SCOPE_SEPARATOR: &str = "::";

/// Index of a function overload set inside [`ClassModel::functions`].
pub type FunctionId = usize;

/// One parameter of a parsed declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub has_default: bool,
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, has_default: bool) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            has_default,
        }
    }
}

/// A single call shape: name, return type and parameters.
///
/// `return_type` is empty for constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSignature {
    pub name: String,
    pub return_type: String,
    pub params: Vec<Parameter>,
}

/// All call-arity variants of one named function.
///
/// Identity is `(name, is_static, is_meta)`; overloads keep declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionOverloadSet {
    pub name: String,
    pub doc: String,
    pub is_static: bool,
    pub is_meta: bool,
    pub overloads: Vec<ParsedSignature>,
}

impl FunctionOverloadSet {
    pub fn same_identity(&self, other: &Self) -> bool {
        self.name == other.name && self.is_static == other.is_static && self.is_meta == other.is_meta
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyModel {
    pub name: String,
    pub getter: Option<FunctionId>,
    pub setter: Option<FunctionId>,
    pub doc: String,
    /// Set by `@pack_again`: the property is re-wrapped with this type.
    pub repack_type: Option<String>,
}

impl PropertyModel {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn has_getter(&self) -> bool {
        self.getter.is_some()
    }

    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }

    pub fn is_repacked(&self) -> bool {
        self.repack_type.is_some()
    }
}

/// Enum nested inside a class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumModel {
    pub name: String,
    pub emitted_name: String,
    pub cast_to: Option<String>,
    pub items: Vec<String>,
    pub doc: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleEnumKind {
    /// Declared with `@enum`.
    #[default]
    Enum,
    /// Declared with `@def_enum`; items come from the declaring macro, not from tags.
    DefEnum,
}

/// Enum declared outside of any class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleEnumModel {
    pub name: String,
    pub emitted_name: String,
    pub namespace: String,
    pub cast_to: Option<String>,
    pub items: Vec<String>,
    pub doc: String,
    pub kind: ModuleEnumKind,
}

impl ModuleEnumModel {
    pub fn is_def_enum(&self) -> bool {
        self.kind == ModuleEnumKind::DefEnum
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassModel {
    pub name: String,
    pub emitted_name: String,
    pub namespace: String,
    /// Short names of the enclosing classes joined with `.`; empty at top level.
    pub outer_class: String,
    /// Emitted names of the enclosing classes joined with [`SCOPE_SEPARATOR`].
    pub outer_emitted_name: String,
    pub doc: String,
    pub bases: Vec<String>,
    pub constructors: Vec<FunctionOverloadSet>,
    pub functions: Vec<FunctionOverloadSet>,
    pub properties: Vec<PropertyModel>,
    pub enums: Vec<EnumModel>,
    pub constants: Vec<String>,
    pub aliases: BTreeMap<String, String>,
}

impl ClassModel {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            emitted_name: name.clone(),
            name,
            ..Default::default()
        }
    }

    pub fn is_nested(&self) -> bool {
        !self.outer_emitted_name.is_empty()
    }

    /// Fully qualified emitted path, e.g. `Outer::Inner`.
    pub fn qualified_name(&self) -> String {
        if self.outer_emitted_name.is_empty() {
            self.emitted_name.clone()
        } else {
            format!(
                "{}{}{}",
                self.outer_emitted_name, SCOPE_SEPARATOR, self.emitted_name
            )
        }
    }

    pub fn function(&self, name: &str) -> Option<&FunctionOverloadSet> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyModel> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Resolve a property accessor reference to the function it points at.
    pub fn accessor(&self, id: Option<FunctionId>) -> Option<&FunctionOverloadSet> {
        id.and_then(|id| self.functions.get(id))
    }
}

/// Root of the model: everything extracted from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleModel {
    /// Host-language namespace declared with `@cpp_ns`.
    pub target_namespace: String,
    pub classes: Vec<ClassModel>,
    pub enums: Vec<ModuleEnumModel>,
    pub using_namespaces: Vec<String>,
    pub include_paths: BTreeSet<String>,
    pub custom_code: Option<String>,
}

impl ModuleModel {
    pub fn class(&self, name: &str) -> Option<&ClassModel> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.enums.is_empty() && self.custom_code.is_none()
    }

    pub fn function_count(&self) -> usize {
        self.classes
            .iter()
            .map(|c| c.functions.len() + c.constructors.len())
            .sum()
    }

    pub fn property_count(&self) -> usize {
        self.classes.iter().map(|c| c.properties.len()).sum()
    }

    /// Top-level enums plus enums nested in classes.
    pub fn enum_count(&self) -> usize {
        self.enums.len() + self.classes.iter().map(|c| c.enums.len()).sum::<usize>()
    }
}
