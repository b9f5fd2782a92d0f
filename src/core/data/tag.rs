/// The fixed `@word` vocabulary understood by the assembler.
///
/// Tags outside this list are kept in the block but have no assembly-time effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Namespace,
    TargetNamespace,
    IncludeFrom,
    UsingNamespace,
    Class,
    Struct,
    Inherit,
    Enum,
    EnumItem,
    CastTo,
    DefEnum,
    Construct,
    DefaultConstruct,
    Func,
    StaticFunc,
    MetaFunc,
    FuncSig,
    Property,
    PropertyGet,
    PropertySet,
    PackAgain,
    Constant,
    EmittedName,
    Alias,
    RefCode,
    Brief,
    Note,
}

impl Tag {
    pub const ALL: [Tag; 27] = [
        Tag::Namespace,
        Tag::TargetNamespace,
        Tag::IncludeFrom,
        Tag::UsingNamespace,
        Tag::Class,
        Tag::Struct,
        Tag::Inherit,
        Tag::Enum,
        Tag::EnumItem,
        Tag::CastTo,
        Tag::DefEnum,
        Tag::Construct,
        Tag::DefaultConstruct,
        Tag::Func,
        Tag::StaticFunc,
        Tag::MetaFunc,
        Tag::FuncSig,
        Tag::Property,
        Tag::PropertyGet,
        Tag::PropertySet,
        Tag::PackAgain,
        Tag::Constant,
        Tag::EmittedName,
        Tag::Alias,
        Tag::RefCode,
        Tag::Brief,
        Tag::Note,
    ];

    /// Parse a tag name without its leading `@`. Case sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Namespace => "ns",
            Self::TargetNamespace => "cpp_ns",
            Self::IncludeFrom => "include_from",
            Self::UsingNamespace => "using_ns",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Inherit => "inherit",
            Self::Enum => "enum",
            Self::EnumItem => "enum_item",
            Self::CastTo => "cast_to",
            Self::DefEnum => "def_enum",
            Self::Construct => "construct",
            Self::DefaultConstruct => "default_construct",
            Self::Func => "func",
            Self::StaticFunc => "static_func",
            Self::MetaFunc => "meta_func",
            Self::FuncSig => "func_sig",
            Self::Property => "property",
            Self::PropertyGet => "property_get",
            Self::PropertySet => "property_set",
            Self::PackAgain => "pack_again",
            Self::Constant => "constant",
            Self::EmittedName => "cpp_name",
            Self::Alias => "alias",
            Self::RefCode => "ref_code",
            Self::Brief => "brief",
            Self::Note => "note",
        }
    }

    /// Function markers, in the priority order used to pick the function kind.
    pub const FUNCTION_MARKERS: [Tag; 4] =
        [Tag::Construct, Tag::Func, Tag::StaticFunc, Tag::MetaFunc];

    /// Blocks carrying one of these tags get the following declaration captured.
    pub fn requires_signature(&self) -> bool {
        Self::FUNCTION_MARKERS.contains(self)
    }

    /// Tags whose values are folded into the documentation string.
    pub fn is_doc(&self) -> bool {
        matches!(self, Self::Brief | Self::Note)
    }
}

/// Split a normalized comment line into `(tag, value)` if it starts with `@`.
///
/// The tag is the first whitespace-separated token without the `@`; the value is the
/// rest of the line with leading whitespace removed.
pub fn split_tag_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('@')?;
    match rest.find(char::is_whitespace) {
        Some(pos) => Some((&rest[..pos], rest[pos..].trim_start())),
        None => Some((rest, "")),
    }
}
