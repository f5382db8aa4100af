//! Data model for parsed IDL metadata, independent of the wire layout.

/// Complete parsed document from a single metadata resource.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MetadataDocument {
    /// Enums, structs, exceptions and typedefs in declaration order
    pub types: Vec<TypeDoc>,
    pub services: Vec<ServiceDoc>,
}

/// A declared type. Enums and structs share this shape.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeDoc {
    /// e.g. "thrift.test.Numberz"
    pub qualified_name: String,
    pub docstring: Option<String>,
    /// Enum values or struct fields
    pub members: Vec<MemberDoc>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemberDoc {
    pub name: String,
    pub docstring: Option<String>,
}

/// A declared RPC service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ServiceDoc {
    /// e.g. "thrift.test.ThriftTest"
    pub qualified_name: String,
    pub docstring: Option<String>,
    pub methods: Vec<MethodDoc>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MethodDoc {
    pub name: String,
    pub docstring: Option<String>,
    pub params: Vec<ParamDoc>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParamDoc {
    pub name: String,
    pub docstring: Option<String>,
}
