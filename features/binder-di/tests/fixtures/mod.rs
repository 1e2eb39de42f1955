//! Constructible types shared across the integration suite.

use std::sync::Arc;

use binder_di::{Describe, Instance, ParamSpec, TypeDescriptor, TypeRegistry, Value};

/// A registry describing every fixture type
pub fn registry() -> TypeRegistry {
    let mut types = TypeRegistry::new();
    types
        .register::<Foo>()
        .register::<RequireFoo>()
        .register::<WithDefaults>()
        .register::<NeedsAnything>()
        .register::<Explosive>()
        .register::<LoopA>()
        .register::<LoopB>()
        .register::<LoopC>();
    types
}

pub struct Foo {
    string: String,
}

impl Foo {
    pub fn new(string: impl Into<String>) -> Self {
        Foo {
            string: string.into(),
        }
    }

    pub fn string(&self) -> &str {
        &self.string
    }
}

impl Describe for Foo {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("Foo", vec![], |_| Ok(Instance::new(Foo::new("foo"))))
    }
}

pub struct RequireFoo {
    foo: Arc<Foo>,
}

impl RequireFoo {
    pub fn new(foo: Arc<Foo>) -> Self {
        RequireFoo { foo }
    }

    pub fn foo(&self) -> &Foo {
        &self.foo
    }
}

impl Describe for RequireFoo {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new(
            "RequireFoo",
            vec![ParamSpec::of_type("Foo")],
            |arguments| {
                let mut arguments = arguments.into_iter();
                let foo = arguments
                    .next()
                    .ok_or("missing constructor argument")?
                    .downcast::<Foo>()?;
                Ok(Instance::new(RequireFoo::new(foo)))
            },
        )
    }
}

pub struct WithDefaults {
    items: Vec<String>,
}

impl WithDefaults {
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl Describe for WithDefaults {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new(
            "WithDefaults",
            vec![ParamSpec::with_default(Value::List(vec![
                Value::Str("foo".to_string()),
                Value::Str("bar".to_string()),
            ]))],
            |arguments| {
                let mut arguments = arguments.into_iter();
                let Some(Value::List(values)) = arguments.next() else {
                    return Err("expected a list argument".into());
                };
                let mut items = Vec::with_capacity(values.len());
                for value in values {
                    match value {
                        Value::Str(item) => items.push(item),
                        other => {
                            return Err(
                                format!("unexpected list element of kind {}", other.kind()).into()
                            )
                        }
                    }
                }
                Ok(Instance::new(WithDefaults { items }))
            },
        )
    }
}

/// Requires an argument that has neither a declared type nor a default
pub struct NeedsAnything;

impl Describe for NeedsAnything {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("NeedsAnything", vec![ParamSpec::untyped()], |_| {
            Ok(Instance::new(NeedsAnything))
        })
    }
}

/// Constructible on paper, but its constructor always fails
pub struct Explosive;

impl Describe for Explosive {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("Explosive", vec![], |_| Err("boom".into()))
    }
}

// A three-type cycle: LoopA -> LoopB -> LoopC -> LoopA. None of these can
// ever be constructed; they exist to exercise the recursion guard.

pub struct LoopA {
    _b: Arc<LoopB>,
}

impl Describe for LoopA {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("LoopA", vec![ParamSpec::of_type("LoopB")], |arguments| {
            let mut arguments = arguments.into_iter();
            let b = arguments
                .next()
                .ok_or("missing constructor argument")?
                .downcast::<LoopB>()?;
            Ok(Instance::new(LoopA { _b: b }))
        })
    }
}

pub struct LoopB {
    _c: Arc<LoopC>,
}

impl Describe for LoopB {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("LoopB", vec![ParamSpec::of_type("LoopC")], |arguments| {
            let mut arguments = arguments.into_iter();
            let c = arguments
                .next()
                .ok_or("missing constructor argument")?
                .downcast::<LoopC>()?;
            Ok(Instance::new(LoopB { _c: c }))
        })
    }
}

pub struct LoopC {
    _a: Arc<LoopA>,
}

impl Describe for LoopC {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("LoopC", vec![ParamSpec::of_type("LoopA")], |arguments| {
            let mut arguments = arguments.into_iter();
            let a = arguments
                .next()
                .ok_or("missing constructor argument")?
                .downcast::<LoopA>()?;
            Ok(Instance::new(LoopC { _a: a }))
        })
    }
}
