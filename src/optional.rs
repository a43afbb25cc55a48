use std::{
    fmt::{Display, Formatter},
    rc::Rc,
};

use crate::{
    error::{Error, Result},
    value::Value,
};

/// Single-slot container telling a held value apart from the two absence
/// sentinels. Immutable after construction; combinators return new
/// wrappers. The slot is module-private, so nothing outside the type can
/// reach it except through [`Optional::get`].
#[derive(Debug, Clone)]
pub struct Optional {
    slot: Rc<Value>,
}

impl Optional {
    /// Wraps a value as-is, without validation.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            slot: Rc::new(value.into()),
        }
    }

    /// Convenience initializer; same as [`Optional::new`].
    pub fn of(value: impl Into<Value>) -> Self {
        Self::new(value)
    }

    /// An Optional explicitly wrapping `null`. Fresh instance on every
    /// call.
    pub fn empty() -> Self {
        Self::new(Value::Null)
    }

    /// Whether a value is a boxed Optional.
    pub fn is_optional(value: &Value) -> bool {
        matches!(value, Value::Optional(_))
    }

    /// Returns the held value, or [`Error::EmptyValue`] when absent.
    pub fn get(&self) -> Result<&Value> {
        if self.is_present() {
            Ok(&self.slot)
        } else {
            Err(Error::EmptyValue)
        }
    }

    /// Returns the held value when present, the fallback otherwise.
    pub fn or_else(&self, fallback: impl Into<Value>) -> Value {
        if self.is_present() {
            (*self.slot).clone()
        } else {
            fallback.into()
        }
    }

    pub fn is_present(&self) -> bool {
        self.slot.is_present()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Calls `effect` with the held value when present. Returns the same
    /// instance for chaining.
    pub fn if_present(&self, effect: impl FnOnce(&Value)) -> &Self {
        if self.is_present() {
            effect(&self.slot);
        }
        self
    }

    /// Calls `effect` when empty. Returns the same instance for chaining.
    pub fn if_empty(&self, effect: impl FnOnce()) -> &Self {
        if self.is_empty() {
            effect();
        }
        self
    }

    /// Wraps the mapped value when present; a mapped Optional stays boxed
    /// inside the new wrapper. When empty, the mapper is not called and
    /// the result shares this wrapper's slot.
    pub fn map(&self, mapper: impl FnOnce(&Value) -> Value) -> Optional {
        if self.is_present() {
            Self::new(mapper(&self.slot))
        } else {
            self.clone()
        }
    }

    /// Like [`Optional::map`], except a mapped Optional is returned
    /// directly instead of being boxed again. Flattens exactly one level.
    pub fn flat_map(&self, mapper: impl FnOnce(&Value) -> Value) -> Optional {
        if self.is_present() {
            match mapper(&self.slot) {
                Value::Optional(inner) => (*inner).clone(),
                mapped => Self::new(mapped),
            }
        } else {
            self.clone()
        }
    }

    /// Keeps the held value when the predicate result is truthy, maps it
    /// to `null` otherwise. An empty Optional is returned as [`map`]
    /// returns it, without calling the predicate.
    ///
    /// [`map`]: Optional::map
    pub fn filter(&self, predicate: impl FnOnce(&Value) -> Value) -> Optional {
        self.map(|value| {
            if predicate(value).is_truthy() {
                value.clone()
            } else {
                Value::Null
            }
        })
    }

    /// Coercive (`==`) comparison of the unwrapped slot against `other`,
    /// itself unwrapped one level when it is a boxed Optional.
    pub fn equals(&self, other: impl Into<Value>) -> bool {
        let (a, b) = self.comparable_values(other.into());
        a.loose_eq(&b)
    }

    /// Strict (`===`) comparison with the same unwrapping as
    /// [`Optional::equals`].
    pub fn strict_equals(&self, other: impl Into<Value>) -> bool {
        let (a, b) = self.comparable_values(other.into());
        a.strict_eq(&b)
    }

    fn comparable_values(&self, other: Value) -> (Value, Value) {
        let a = (*self.slot).clone();
        let b = match other {
            Value::Optional(inner) => (*inner.slot).clone(),
            other => other,
        };
        (a, b)
    }
}

impl Default for Optional {
    /// Construction without an argument; holds `undefined`.
    fn default() -> Self {
        Self::new(Value::Undefined)
    }
}

impl Display for Optional {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_present() {
            write!(f, "Optional({value})", value = self.slot)
        } else {
            f.write_str("Optional(empty)")
        }
    }
}
