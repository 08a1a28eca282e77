//! Runtime description of a business interface.

use std::any::{self, Any, TypeId};
use std::mem;

use iw_core::{Attachable, Inspectable, Wrapper, WrapperAdapter};

use crate::error::{AdapterError, AdapterResult};

/// Whether a business interface type is a trait object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterfaceKind {
    /// `dyn Trait`: a pure capability interface.
    TraitObject,
    /// Anything else: a struct, enum, slice or primitive.
    Concrete,
}

/// A business interface type `B`, described at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BizInterface {
    name: &'static str,
    type_id: TypeId,
    kind: InterfaceKind,
}

impl BizInterface {
    /// Describe the type `B`.
    pub fn of<B: ?Sized + 'static>() -> Self {
        let name = any::type_name::<B>();
        // Trait objects are the only types behind a vtable pointer; slices and
        // `str` are wide as well, so the name settles it. The format of
        // `type_name` is unspecified, which makes this best-effort: a
        // toolchain that stops printing the `dyn ` prefix turns every
        // interface into `Concrete`. The tests below pin the current form.
        let wide = mem::size_of::<*const B>() == mem::size_of::<*const dyn Any>();
        let kind = if wide && name.starts_with("dyn ") {
            InterfaceKind::TraitObject
        } else {
            InterfaceKind::Concrete
        };
        Self {
            name,
            type_id: TypeId::of::<B>(),
            kind,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn kind(&self) -> InterfaceKind {
        self.kind
    }

    /// The contract name if this interface is one the adapter supplies
    /// itself.
    pub fn reserved_name(&self) -> Option<&'static str> {
        reserved_interfaces()
            .into_iter()
            .find(|(type_id, _)| *type_id == self.type_id)
            .map(|(_, name)| name)
    }

    /// Check that adapters can be synthesized for this interface.
    pub fn validate(&self) -> AdapterResult<()> {
        if self.kind != InterfaceKind::TraitObject {
            return Err(AdapterError::NotAnInterface(self.name));
        }
        if let Some(name) = self.reserved_name() {
            return Err(AdapterError::ReservedInterface(name));
        }
        Ok(())
    }
}

fn reserved_interfaces() -> [(TypeId, &'static str); 8] {
    [
        (TypeId::of::<dyn Inspectable>(), "Inspectable"),
        (TypeId::of::<dyn Inspectable + Send + Sync>(), "Inspectable"),
        (TypeId::of::<dyn Wrapper>(), "Wrapper"),
        (TypeId::of::<dyn Wrapper + Send + Sync>(), "Wrapper"),
        (TypeId::of::<dyn WrapperAdapter>(), "WrapperAdapter"),
        (TypeId::of::<dyn WrapperAdapter + Send + Sync>(), "WrapperAdapter"),
        (TypeId::of::<dyn Attachable>(), "Attachable"),
        (TypeId::of::<dyn Attachable + Send + Sync>(), "Attachable"),
    ]
}
