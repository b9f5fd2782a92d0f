use std::collections::HashMap;

use tracing::debug;

use super::block_tags::BlockTags;
use crate::core::data::{
    AnnotationBlock, Block, ClassModel, EnumModel, FunctionId, FunctionOverloadSet,
    ModuleEnumKind, ModuleEnumModel, ModuleModel, ParsedSignature, PropertyModel,
    SCOPE_SEPARATOR, Tag, TagBlock,
};
use crate::core::signature::{generate_overloads, parse_signature};

/// What a `{` sentinel opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// The body of a class announced by the preceding `@class`/`@struct` block.
    Class,
    Unknown,
}

/// An open class and the properties it can link accessors to.
#[derive(Debug)]
struct ClassFrame {
    index: usize,
    properties: HashMap<String, usize>,
}

/// Folds the block stream of one file into a [`ModuleModel`].
///
/// State lives in three places: the default namespace, the stack of open classes and
/// the stack of open scopes. Class frames are popped when the scope their `{` opened is
/// closed, so unrelated braces never close a class.
pub struct Assembler<'a> {
    model: ModuleModel,
    default_namespace: String,
    class_stack: Vec<ClassFrame>,
    scope_stack: Vec<ScopeKind>,
    pending_scope: Option<ScopeKind>,
    wrapper_macros: &'a [String],
}

impl<'a> Assembler<'a> {
    pub fn new(wrapper_macros: &'a [String]) -> Self {
        Self {
            model: ModuleModel::default(),
            default_namespace: String::new(),
            class_stack: Vec::new(),
            scope_stack: Vec::new(),
            pending_scope: None,
            wrapper_macros,
        }
    }

    pub fn apply(&mut self, block: TagBlock) {
        match block {
            Block::BeginScope => self.begin_scope(),
            Block::EndScope => self.end_scope(),
            Block::Annotation(annotation) => self.apply_annotation(&annotation),
        }
    }

    pub fn finish(self) -> ModuleModel {
        self.model
    }

    /// Short names of the open classes, outermost first.
    pub fn open_classes(&self) -> Vec<&str> {
        self.class_stack
            .iter()
            .map(|frame| self.model.classes[frame.index].name.as_str())
            .collect()
    }

    pub fn scope_depth(&self) -> usize {
        self.scope_stack.len()
    }

    // ============================================================
    // Scope sentinels
    // ============================================================

    fn begin_scope(&mut self) {
        let kind = self.pending_scope.take().unwrap_or(ScopeKind::Unknown);
        self.scope_stack.push(kind);
    }

    fn end_scope(&mut self) {
        match self.scope_stack.pop() {
            Some(ScopeKind::Class) => {
                self.class_stack.pop();
            }
            Some(ScopeKind::Unknown) => {}
            None => debug!("scope closed with no open scope"),
        }
    }

    // ============================================================
    // Annotation blocks
    // ============================================================

    fn apply_annotation(&mut self, block: &AnnotationBlock) {
        let tags = BlockTags::new(block);

        if self.scope_stack.is_empty() {
            if let Some(namespace) = tags.get(Tag::Namespace) {
                self.default_namespace = namespace.to_string();
            }
            if let Some(namespace) = tags.get(Tag::TargetNamespace) {
                self.model.target_namespace = namespace.to_string();
            }
        }

        // Module-level tags consume the whole block.
        if tags.has(Tag::IncludeFrom) {
            self.include_from(&tags);
        } else if tags.has(Tag::UsingNamespace) {
            self.using_namespace(&tags);
        } else if tags.has(Tag::DefEnum) {
            self.module_enum(&tags, ModuleEnumKind::DefEnum);
        } else if tags.has(Tag::Enum) && self.class_stack.is_empty() {
            self.module_enum(&tags, ModuleEnumKind::Enum);
        } else if tags.has(Tag::RefCode) {
            self.ref_code(&tags);
        } else if tags.has(Tag::Class) || tags.has(Tag::Struct) {
            self.open_class(&tags);
        } else if self.class_stack.is_empty() {
            debug!(tags = ?block.entries, "member block outside of any class ignored");
        } else {
            self.class_members(&tags);
        }
    }

    fn include_from(&mut self, tags: &BlockTags) {
        let paths = tags.values(Tag::IncludeFrom).filter(|path| !path.is_empty());
        self.model
            .include_paths
            .extend(paths.map(str::to_string));
    }

    fn using_namespace(&mut self, tags: &BlockTags) {
        self.model
            .using_namespaces
            .extend(tags.values(Tag::UsingNamespace).map(str::to_string));
    }

    fn module_enum(&mut self, tags: &BlockTags, kind: ModuleEnumKind) {
        let name_tag = match kind {
            ModuleEnumKind::Enum => Tag::Enum,
            ModuleEnumKind::DefEnum => Tag::DefEnum,
        };
        let name = tags.get(name_tag).unwrap_or_default();

        let mut model = ModuleEnumModel {
            name: name.to_string(),
            emitted_name: tags.get(Tag::EmittedName).unwrap_or(name).to_string(),
            namespace: self.namespace_for(tags),
            doc: tags.doc(),
            kind,
            ..Default::default()
        };
        // DEF_ENUM items live in the declaring macro.
        if kind == ModuleEnumKind::Enum {
            model.cast_to = tags.get(Tag::CastTo).map(str::to_string);
            model.items = tags.values(Tag::EnumItem).map(str::to_string).collect();
        }
        self.model.enums.push(model);
    }

    fn ref_code(&mut self, tags: &BlockTags) {
        if self.class_stack.is_empty() {
            self.model.custom_code = Some(tags.doc());
        } else {
            debug!("@ref_code inside a class ignored");
        }
    }

    fn open_class(&mut self, tags: &BlockTags) {
        self.pending_scope = Some(ScopeKind::Class);

        let name = tags
            .get(Tag::Class)
            .or_else(|| tags.get(Tag::Struct))
            .unwrap_or_default();
        let mut class = ClassModel::new(name);
        class.doc = tags.doc();
        class.namespace = self.namespace_for(tags);
        if let Some(emitted) = tags.get(Tag::EmittedName) {
            class.emitted_name = emitted.to_string();
        }
        class.bases = tags.values(Tag::Inherit).map(str::to_string).collect();

        let outer: Vec<&ClassModel> = self
            .class_stack
            .iter()
            .map(|frame| &self.model.classes[frame.index])
            .collect();
        class.outer_class = outer
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(".");
        class.outer_emitted_name = outer
            .iter()
            .map(|c| c.emitted_name.as_str())
            .collect::<Vec<_>>()
            .join(SCOPE_SEPARATOR);

        self.model.classes.push(class);
        self.class_stack.push(ClassFrame {
            index: self.model.classes.len() - 1,
            properties: HashMap::new(),
        });
    }

    fn namespace_for(&self, tags: &BlockTags) -> String {
        tags.get(Tag::Namespace)
            .unwrap_or(&self.default_namespace)
            .to_string()
    }

    // ============================================================
    // Members of the innermost open class
    // ============================================================

    fn class_members(&mut self, tags: &BlockTags) {
        if let Some(constant) = tags.get(Tag::Constant) {
            self.current_class().constants.push(constant.to_string());
        }
        if let Some(alias) = tags.get(Tag::Alias) {
            self.alias(alias);
        }
        if let Some(name) = tags.get(Tag::Enum) {
            let model = EnumModel {
                name: name.to_string(),
                emitted_name: tags.get(Tag::EmittedName).unwrap_or(name).to_string(),
                cast_to: tags.get(Tag::CastTo).map(str::to_string),
                items: tags.values(Tag::EnumItem).map(str::to_string).collect(),
                doc: tags.doc(),
            };
            self.current_class().enums.push(model);
        }
        if let Some(name) = tags.get(Tag::Property) {
            let property = PropertyModel {
                name: name.to_string(),
                doc: tags.doc(),
                repack_type: tags.get(Tag::PackAgain).map(str::to_string),
                ..Default::default()
            };
            self.add_property(property);
        }
        if tags.has(Tag::DefaultConstruct) {
            self.current_class().constructors.push(FunctionOverloadSet {
                overloads: vec![ParsedSignature::default()],
                ..Default::default()
            });
        }
        if let Some((marker, name)) = tags.function_marker() {
            self.function(tags, marker, name);
        }
    }

    fn alias(&mut self, value: &str) {
        let parts: Vec<&str> = value.split('=').collect();
        let [new_name, old_name] = parts.as_slice() else {
            debug!(alias = value, "malformed @alias ignored");
            return;
        };
        self.current_class()
            .aliases
            .insert(new_name.trim().to_string(), old_name.trim().to_string());
    }

    fn function(&mut self, tags: &BlockTags, marker: Tag, name: &str) {
        let mut set = FunctionOverloadSet {
            name: name.to_string(),
            doc: tags.doc(),
            is_static: marker == Tag::StaticFunc,
            is_meta: marker == Tag::MetaFunc,
            overloads: Vec::new(),
        };

        match tags.signature() {
            Some(signature) => {
                let class_name = self.current_class().name.clone();
                match parse_signature(signature, &class_name, self.wrapper_macros) {
                    Some(parsed) => set.overloads = generate_overloads(&parsed),
                    None => debug!(signature, "unparseable declaration, no overloads"),
                }
            }
            None => debug!(function = name, "function block without a declaration"),
        }
        if set.name.is_empty()
            && let Some(first) = set.overloads.first()
        {
            set.name = first.name.clone();
        }

        if marker == Tag::Construct {
            self.current_class().constructors.push(set);
            return;
        }

        let id = self.merge_function(set);
        if let Some(property) = tags.get(Tag::PropertyGet) {
            let index = self.property_index(property);
            self.current_class().properties[index].getter = Some(id);
        }
        if let Some(property) = tags.get(Tag::PropertySet) {
            let index = self.property_index(property);
            self.current_class().properties[index].setter = Some(id);
        }
    }

    /// Append `set` to an existing overload set with the same identity, or add it.
    fn merge_function(&mut self, set: FunctionOverloadSet) -> FunctionId {
        let functions = &mut self.current_class().functions;
        match functions.iter().position(|f| f.same_identity(&set)) {
            Some(id) => {
                functions[id].overloads.extend(set.overloads);
                id
            }
            None => {
                functions.push(set);
                functions.len() - 1
            }
        }
    }

    fn add_property(&mut self, property: PropertyModel) -> usize {
        let name = property.name.clone();
        let properties = &mut self.current_class().properties;
        properties.push(property);
        let index = properties.len() - 1;
        if let Some(frame) = self.class_stack.last_mut() {
            frame.properties.insert(name, index);
        }
        index
    }

    /// Property known to the open class, created on first accessor reference.
    fn property_index(&mut self, name: &str) -> usize {
        let cached = self
            .class_stack
            .last()
            .and_then(|frame| frame.properties.get(name).copied());
        match cached {
            Some(index) => index,
            None => self.add_property(PropertyModel::named(name)),
        }
    }

    /// Only called while a class is open.
    fn current_class(&mut self) -> &mut ClassModel {
        let index = self.class_stack.last().map_or(0, |frame| frame.index);
        &mut self.model.classes[index]
    }
}

/// Run a whole block stream through a fresh [`Assembler`].
pub fn assemble<I>(blocks: I, wrapper_macros: &[String]) -> ModuleModel
where
    I: IntoIterator<Item = TagBlock>,
{
    let mut assembler = Assembler::new(wrapper_macros);
    for block in blocks {
        assembler.apply(block);
    }
    assembler.finish()
}
