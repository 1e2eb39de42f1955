use std::{
    any::{type_name, Any, TypeId},
    sync::Arc,
};

/// Boxed error for opaque failures reported by user code
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Anything held by the container must be shareable and own its data
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// Type Name and Type Id
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}

/// A resolved object held by the container
#[derive(Clone)]
pub struct Instance {
    pub info: TypeInfo,
    instance: Arc<dyn Any + Send + Sync + 'static>,
}

impl Instance {
    pub fn new<T: Injectable>(value: T) -> Self {
        Instance {
            info: TypeInfo::of::<T>(),
            instance: Arc::new(value),
        }
    }

    /// Wraps an already shared value without another allocation
    pub fn from_arc<T: Injectable>(value: Arc<T>) -> Self {
        Instance {
            info: TypeInfo::of::<T>(),
            instance: value,
        }
    }

    pub fn downcast<T: Injectable>(&self) -> Result<Arc<T>, &'static str> {
        match Arc::downcast::<T>(self.instance.clone()) {
            Ok(downcasted) => Ok(downcasted),
            Err(_) => Err(self.info.type_name),
        }
    }

    /// Whether two handles point at the same underlying object
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.instance, &other.instance)
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Instance").field(&self.info.type_name).finish()
    }
}

/// A runtime value produced or consumed during resolution.
///
/// Factory callbacks and parameter defaults traffic in these. Only
/// [`Value::Object`] is accepted as the result of a resolution; the other
/// kinds exist so defaults and constructor arguments can carry plain data,
/// and so a misbehaving factory can be rejected with a diagnostic naming
/// what it actually returned.
#[derive(Debug, Clone)]
pub enum Value {
    Object(Instance),
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    Null,
}

impl Value {
    /// Wraps a concrete value as an object
    pub fn object<T: Injectable>(value: T) -> Value {
        Value::Object(Instance::new(value))
    }

    /// The kind name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Object(_) => "object",
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::List(_) => "list",
            Value::Null => "null",
        }
    }

    pub fn as_object(&self) -> Option<&Instance> {
        match self {
            Value::Object(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn into_object(self) -> Option<Instance> {
        match self {
            Value::Object(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(int) => Some(*int),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(bool) => Some(*bool),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    /// Downcasts an object value to a concrete type.
    ///
    /// Meant for descriptor construct functions unpacking their positional
    /// arguments.
    pub fn downcast<T: Injectable>(self) -> Result<Arc<T>, DynError> {
        match self {
            Value::Object(instance) => instance.downcast::<T>().map_err(|actual| {
                format!("expected {}, got {}", type_name::<T>(), actual).into()
            }),
            other => Err(format!("expected an object, got {}", other.kind()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Foo(&'static str);

    #[test]
    fn downcast_returns_the_original_value() {
        let instance = Instance::new(Foo("foo"));
        let foo = instance.downcast::<Foo>().unwrap();
        assert_eq!(foo.0, "foo");
    }

    #[test]
    fn downcast_mismatch_names_the_actual_type() {
        let instance = Instance::new(Foo("foo"));
        let actual = instance.downcast::<String>().unwrap_err();
        assert!(actual.contains("Foo"));
    }

    #[test]
    fn clones_share_the_same_object() {
        let instance = Instance::new(Foo("foo"));
        let clone = instance.clone();
        assert!(instance.ptr_eq(&clone));
        assert!(!instance.ptr_eq(&Instance::new(Foo("foo"))));
    }

    #[test]
    fn value_kinds() {
        assert_eq!(Value::object(Foo("foo")).kind(), "object");
        assert_eq!(Value::Str("foo".into()).kind(), "string");
        assert_eq!(Value::Int(1).kind(), "integer");
        assert_eq!(Value::List(vec![]).kind(), "list");
        assert_eq!(Value::Null.kind(), "null");
    }

    #[test]
    fn value_downcast_rejects_non_objects() {
        let error = Value::Int(1).downcast::<Foo>().unwrap_err();
        assert!(error.to_string().contains("integer"));
    }
}
