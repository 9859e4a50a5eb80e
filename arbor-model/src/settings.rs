//! The expiry module's settings singleton.
//!
//! A thin, concrete instance of the generic field-accessor contract: every
//! property reads through the id-first/name-fallback lookup and every
//! setter follows the changing/changed notification order. The item lives
//! at a well-known location resolved through [`FixedPath`].

use crate::{domain_object, Expected, ExpectedChild, FixedPath, Resolver, Result};
use arbor_types::{ItemId, TemplateId};

/// Template of the expiry settings item.
pub const EXPIRY_SETTINGS_TEMPLATE: TemplateId =
    TemplateId::from_u128(0x8C4E_0D21_77B2_4C93_A1F0_3B5D_9E62_14A7);

/// Well-known location of the expiry module root.
pub const EXPIRY_MODULE_ITEM: FixedPath = FixedPath::new(
    ItemId::from_u128(0x5B07_92E4_1A6D_4F38_BC55_0E97_D240_8319),
    "/arbor/system/modules/expiry",
);

/// Well-known location of the settings singleton.
pub const EXPIRY_SETTINGS_ITEM: FixedPath = FixedPath::new(
    ItemId::from_u128(0xE6D1_4B8A_3C20_4975_9F12_67AE_05C3_BD64),
    "/arbor/system/modules/expiry/settings",
);

/// Field references for the settings template.
pub mod fields {
    use crate::FieldRef;
    use arbor_types::FieldId;

    pub const ENABLED: FieldRef = FieldRef::new(
        FieldId::from_u128(0x21A8_55F0_6E93_4D17_8B4C_D2E1_7F30_96C5),
        "Enabled",
    );
    pub const WARNING_DAYS: FieldRef = FieldRef::new(
        FieldId::from_u128(0x7D39_C4B6_02E8_48AF_95D0_1864_3EB2_C7F1),
        "Warning Days",
    );
    pub const NOTIFY_FROM: FieldRef = FieldRef::new(
        FieldId::from_u128(0x4F82_1E6D_B753_49C0_A2B9_8D05_61CE_F432),
        "Notify From",
    );
    pub const NOTIFY_TO: FieldRef = FieldRef::new(
        FieldId::from_u128(0x9B60_37D2_854E_4A1B_BE78_F5C3_20A9_D816),
        "Notify To",
    );
    pub const SUBJECT: FieldRef = FieldRef::new(
        FieldId::from_u128(0x03C7_A91E_4D28_46F5_8E61_B0D4_75F2_398A),
        "Subject",
    );
    pub const BODY: FieldRef = FieldRef::new(
        FieldId::from_u128(0xC5E9_68B3_1F07_42D6_A384_952C_E0B1_647D),
        "Body",
    );
}

domain_object! {
    /// Typed view over the expiry module's settings singleton.
    pub struct ExpirySettings
}

impl ExpirySettings {
    /// Resolves the settings singleton at its well-known location.
    ///
    /// # Errors
    ///
    /// A located item whose template is not bound to this type is a
    /// configuration defect.
    pub fn resolve(resolver: &Resolver) -> Result<Option<Self>> {
        EXPIRY_SETTINGS_ITEM.resolve_as(resolver)
    }

    /// Whether expiry notices are sent at all; `false` when unset.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.boolean(fields::ENABLED)
    }

    pub fn set_enabled(&self, value: bool) -> bool {
        self.set_boolean(fields::ENABLED, value)
    }

    /// How many days before expiry the notice goes out; `None` when unset.
    #[must_use]
    pub fn warning_days(&self) -> Option<i64> {
        self.integer(fields::WARNING_DAYS)
    }

    pub fn set_warning_days(&self, days: i64) -> bool {
        self.set_integer(fields::WARNING_DAYS, days)
    }

    /// Sender address for notices; `""` when unset.
    #[must_use]
    pub fn notify_from(&self) -> String {
        self.text(fields::NOTIFY_FROM)
    }

    pub fn set_notify_from(&self, value: &str) -> bool {
        self.set_text(fields::NOTIFY_FROM, value)
    }

    /// Recipient address for notices; `""` when unset.
    #[must_use]
    pub fn notify_to(&self) -> String {
        self.text(fields::NOTIFY_TO)
    }

    pub fn set_notify_to(&self, value: &str) -> bool {
        self.set_text(fields::NOTIFY_TO, value)
    }

    /// Notice subject line; `""` when unset.
    #[must_use]
    pub fn subject(&self) -> String {
        self.text(fields::SUBJECT)
    }

    pub fn set_subject(&self, value: &str) -> bool {
        self.set_text(fields::SUBJECT, value)
    }

    /// Notice body; `""` when unset.
    #[must_use]
    pub fn body(&self) -> String {
        self.text(fields::BODY)
    }

    pub fn set_body(&self, value: &str) -> bool {
        self.set_text(fields::BODY, value)
    }
}

/// The expected shape of the expiry module subtree, for
/// [`validate_structure`](crate::validate_structure) against the module
/// root.
#[must_use]
pub fn module_structure() -> Vec<ExpectedChild> {
    vec![ExpectedChild::new(
        "settings",
        Expected::Template(EXPIRY_SETTINGS_TEMPLATE),
    )]
}
