//! The type registry: a closed table mapping templates to wrapper types.
//!
//! Built once at startup through [`TypeRegistryBuilder`]; resolution is a
//! pure lookup-and-invoke over factory closures captured at registration,
//! with no runtime type introspection. Capability (contributing-template) tags
//! attach to each registered type's descriptor, so capability membership is
//! a set-containment check.

use crate::{DomainItem, Item, ModelError, Result, TypedItem};
use arbor_types::TemplateId;
use std::any::{Any, TypeId};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::info;

type Factory = Arc<dyn Fn(Item) -> Box<dyn TypedItem> + Send + Sync>;

/// One registered template-to-type binding.
pub struct TypeDescriptor {
    template_id: TemplateId,
    type_id: TypeId,
    type_name: &'static str,
    factory: Factory,
    capabilities: BTreeSet<TemplateId>,
}

impl TypeDescriptor {
    /// The template this descriptor is the primary mapping for.
    #[must_use]
    pub fn template_id(&self) -> TemplateId {
        self.template_id
    }

    /// The registered concrete type's name, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The contributing-template tags this type declares.
    #[must_use]
    pub fn capabilities(&self) -> &BTreeSet<TemplateId> {
        &self.capabilities
    }

    pub(crate) fn create(&self, item: Item) -> Box<dyn TypedItem> {
        (self.factory)(item)
    }
}

/// The closed template-to-type table.
pub struct TypeRegistry {
    by_template: HashMap<TemplateId, TypeDescriptor>,
    primary_by_type: HashMap<TypeId, TemplateId>,
}

impl TypeRegistry {
    /// Starts an empty registration set.
    #[must_use]
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    /// The primary descriptor for a template, if one is registered.
    #[must_use]
    pub fn primary(&self, template_id: TemplateId) -> Option<&TypeDescriptor> {
        self.by_template.get(&template_id)
    }

    /// Whether the registered type for `type_id` declares `capability`.
    ///
    /// Unregistered types, including the base wrapper, have no
    /// capabilities.
    #[must_use]
    pub fn type_has_capability(&self, type_id: TypeId, capability: TemplateId) -> bool {
        self.primary_by_type
            .get(&type_id)
            .and_then(|template_id| self.by_template.get(template_id))
            .is_some_and(|descriptor| descriptor.capabilities.contains(&capability))
    }

    /// Whether a resolved wrapper's concrete type declares `capability`.
    #[must_use]
    pub fn wrapper_has_capability(&self, wrapper: &dyn TypedItem, capability: TemplateId) -> bool {
        let any: &dyn Any = wrapper;
        self.type_has_capability(any.type_id(), capability)
    }

    /// Every template id valid for `T`: its primary template plus the
    /// contributing tags it declares.
    #[must_use]
    pub fn templates_valid_for<T: TypedItem>(&self) -> BTreeSet<TemplateId> {
        let mut out = BTreeSet::new();
        if let Some(template_id) = self.primary_by_type.get(&TypeId::of::<T>()) {
            out.insert(*template_id);
            if let Some(descriptor) = self.by_template.get(template_id) {
                out.extend(descriptor.capabilities.iter().copied());
            }
        }
        out
    }

    /// Verifies that `template_id` is primarily mapped to exactly `T`.
    ///
    /// # Errors
    ///
    /// [`ModelError::TemplateNotRegistered`] when the template has no
    /// mapping, [`ModelError::TemplateMismatch`] when it is mapped to a
    /// different type.
    pub fn check_binding<T: TypedItem>(&self, template_id: TemplateId) -> Result<()> {
        let descriptor = self
            .by_template
            .get(&template_id)
            .ok_or(ModelError::TemplateNotRegistered { template_id })?;
        if descriptor.type_id != TypeId::of::<T>() {
            return Err(ModelError::TemplateMismatch {
                template_id,
                registered: descriptor.type_name,
                requested: std::any::type_name::<T>(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("templates", &self.by_template.keys().collect::<Vec<_>>())
            .field("primary_types", &self.primary_by_type.len())
            .finish()
    }
}

struct Registration {
    template_id: TemplateId,
    type_id: TypeId,
    type_name: &'static str,
    factory: Factory,
}

/// Collects registrations, then validates the whole table at once.
#[derive(Default)]
pub struct TypeRegistryBuilder {
    registrations: Vec<Registration>,
    capabilities: Vec<(TypeId, &'static str, TemplateId)>,
}

impl TypeRegistryBuilder {
    /// Registers `T` as the primary mapping for `template_id`.
    #[must_use]
    pub fn register<T: DomainItem>(mut self, template_id: TemplateId) -> Self {
        self.registrations.push(Registration {
            template_id,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            factory: Arc::new(|item: Item| Box::new(T::wrap(item)) as Box<dyn TypedItem>),
        });
        self
    }

    /// Declares that `T` carries the contributing-template tag `capability`.
    #[must_use]
    pub fn capability<T: DomainItem>(mut self, capability: TemplateId) -> Self {
        self.capabilities
            .push((TypeId::of::<T>(), std::any::type_name::<T>(), capability));
        self
    }

    /// Validates and closes the table.
    ///
    /// # Errors
    ///
    /// [`ModelError::DuplicateTemplate`] when two registrations claim one
    /// template, [`ModelError::DuplicatePrimaryType`] when one type is
    /// registered twice, [`ModelError::CapabilityForUnregisteredType`] when
    /// a tag names a type with no primary mapping.
    pub fn build(self) -> Result<TypeRegistry> {
        let mut by_template: HashMap<TemplateId, TypeDescriptor> = HashMap::new();
        let mut primary_by_type: HashMap<TypeId, TemplateId> = HashMap::new();

        for registration in self.registrations {
            if let Some(existing) = by_template.get(&registration.template_id) {
                return Err(ModelError::DuplicateTemplate {
                    template_id: registration.template_id,
                    type_name: existing.type_name,
                });
            }
            if let Some(previous_template) = primary_by_type.get(&registration.type_id) {
                return Err(ModelError::DuplicatePrimaryType {
                    type_name: registration.type_name,
                    template_id: *previous_template,
                });
            }
            primary_by_type.insert(registration.type_id, registration.template_id);
            by_template.insert(
                registration.template_id,
                TypeDescriptor {
                    template_id: registration.template_id,
                    type_id: registration.type_id,
                    type_name: registration.type_name,
                    factory: registration.factory,
                    capabilities: BTreeSet::new(),
                },
            );
        }

        for (type_id, type_name, capability) in self.capabilities {
            let Some(template_id) = primary_by_type.get(&type_id) else {
                return Err(ModelError::CapabilityForUnregisteredType {
                    capability,
                    type_name,
                });
            };
            if let Some(descriptor) = by_template.get_mut(template_id) {
                descriptor.capabilities.insert(capability);
            }
        }

        info!(types = by_template.len(), "type registry built");
        Ok(TypeRegistry {
            by_template,
            primary_by_type,
        })
    }
}
