//! Core data model: the [`Contact`] record and its typed attribute keys.
//!
//! A contact is a flat bag of optional attributes covering the union of the
//! Google and Outlook contact-export schemas. Attributes are addressed by
//! [`TextField`] / [`DateField`] rather than by string name, so every
//! read and write by key is an exhaustive `match` checked at compile time.
//!
//! The struct, the two key enums, and the accessors are generated from one
//! attribute list by `contact_schema!` so they cannot drift apart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::serde_date;

macro_rules! contact_schema {
    (
        text {
            $( $(#[$text_meta:meta])* $text:ident => $text_variant:ident, )+
        }
        date {
            $( $date:ident => $date_variant:ident, )+
        }
    ) => {
        /// A contact record.
        ///
        /// Every attribute is optional. `None` means "absent"; an empty
        /// string is never a deliberate value (see [`Contact::prune_blank`]).
        /// `id` is assigned by the storage layer and stays `None` until the
        /// record is persisted or merged into an existing one.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Contact {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub id: Option<i64>,
            $(
                $(#[$text_meta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $text: Option<String>,
            )+
            $(
                #[serde(default, skip_serializing_if = "Option::is_none", with = "serde_date")]
                pub $date: Option<NaiveDate>,
            )+
        }

        /// String-valued contact attributes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TextField {
            $( $text_variant, )+
        }

        impl TextField {
            pub const ALL: &'static [TextField] = &[ $( TextField::$text_variant, )+ ];

            /// The attribute's field name on [`Contact`].
            pub fn name(self) -> &'static str {
                match self {
                    $( TextField::$text_variant => stringify!($text), )+
                }
            }
        }

        /// Calendar-date contact attributes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum DateField {
            $( $date_variant, )+
        }

        impl DateField {
            pub const ALL: &'static [DateField] = &[ $( DateField::$date_variant, )+ ];

            pub fn name(self) -> &'static str {
                match self {
                    $( DateField::$date_variant => stringify!($date), )+
                }
            }
        }

        impl Contact {
            pub fn text(&self, field: TextField) -> Option<&str> {
                match field {
                    $( TextField::$text_variant => self.$text.as_deref(), )+
                }
            }

            pub fn text_mut(&mut self, field: TextField) -> &mut Option<String> {
                match field {
                    $( TextField::$text_variant => &mut self.$text, )+
                }
            }

            pub fn date(&self, field: DateField) -> Option<NaiveDate> {
                match field {
                    $( DateField::$date_variant => self.$date, )+
                }
            }

            pub fn date_mut(&mut self, field: DateField) -> &mut Option<NaiveDate> {
                match field {
                    $( DateField::$date_variant => &mut self.$date, )+
                }
            }
        }
    };
}

contact_schema! {
    text {
        image_url => ImageUrl,
        first_name => FirstName,
        middle_name => MiddleName,
        last_name => LastName,
        title => Title,
        suffix => Suffix,
        nickname => Nickname,
        given_yomi => GivenYomi,
        surname_yomi => SurnameYomi,
        email_address => EmailAddress,
        email2_address => Email2Address,
        email3_address => Email3Address,
        primary_phone => PrimaryPhone,
        mobile_phone => MobilePhone,
        home_phone => HomePhone,
        home_phone2 => HomePhone2,
        business_phone => BusinessPhone,
        business_phone2 => BusinessPhone2,
        company_main_phone => CompanyMainPhone,
        assistant_phone => AssistantPhone,
        other_phone => OtherPhone,
        car_phone => CarPhone,
        radio_phone => RadioPhone,
        pager => Pager,
        callback => Callback,
        isdn => Isdn,
        tty_tdd_phone => TtyTddPhone,
        telex => Telex,
        home_fax => HomeFax,
        business_fax => BusinessFax,
        other_fax => OtherFax,
        company => Company,
        company_yomi => CompanyYomi,
        job_title => JobTitle,
        department => Department,
        office_location => OfficeLocation,
        manager_name => ManagerName,
        assistant_name => AssistantName,
        home_address => HomeAddress,
        home_street => HomeStreet,
        home_street2 => HomeStreet2,
        home_street3 => HomeStreet3,
        #[serde(rename = "homeAddressPOBox")]
        home_address_po_box => HomeAddressPoBox,
        home_city => HomeCity,
        home_state => HomeState,
        home_postal_code => HomePostalCode,
        home_country => HomeCountry,
        home_country_region => HomeCountryRegion,
        business_address => BusinessAddress,
        business_street => BusinessStreet,
        business_street2 => BusinessStreet2,
        business_street3 => BusinessStreet3,
        #[serde(rename = "businessAddressPOBox")]
        business_address_po_box => BusinessAddressPoBox,
        business_city => BusinessCity,
        business_state => BusinessState,
        business_postal_code => BusinessPostalCode,
        business_country => BusinessCountry,
        business_country_region => BusinessCountryRegion,
        other_address => OtherAddress,
        other_street => OtherStreet,
        other_street2 => OtherStreet2,
        other_street3 => OtherStreet3,
        #[serde(rename = "otherAddressPOBox")]
        other_address_po_box => OtherAddressPoBox,
        other_city => OtherCity,
        other_state => OtherState,
        other_postal_code => OtherPostalCode,
        other_country => OtherCountry,
        other_country_region => OtherCountryRegion,
        notes => Notes,
        categories => Categories,
        hobby => Hobby,
        spouse => Spouse,
        children => Children,
        schools => Schools,
        referred_by => ReferredBy,
        location => Location,
        web_page => WebPage,
        personal_web_page => PersonalWebPage,
        im_address => ImAddress,
    }
    date {
        birthday => Birthday,
        anniversary => Anniversary,
    }
}

/// Any contact attribute, text or date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Text(TextField),
    Date(DateField),
}

impl ContactField {
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Text(f) => f.name(),
            ContactField::Date(f) => f.name(),
        }
    }
}

impl From<TextField> for ContactField {
    fn from(field: TextField) -> Self {
        ContactField::Text(field)
    }
}

impl From<DateField> for ContactField {
    fn from(field: DateField) -> Self {
        ContactField::Date(field)
    }
}

/// True when a text slot holds no usable value.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

impl Contact {
    /// Whether `field` carries a value. Empty strings count as absent.
    pub fn is_set(&self, field: ContactField) -> bool {
        match field {
            ContactField::Text(f) => !is_blank(self.text(f)),
            ContactField::Date(f) => self.date(f).is_some(),
        }
    }

    /// Number of populated attributes, not counting `id`.
    pub fn populated_field_count(&self) -> usize {
        let texts = TextField::ALL
            .iter()
            .filter(|f| !is_blank(self.text(**f)))
            .count();
        let dates = DateField::ALL
            .iter()
            .filter(|f| self.date(**f).is_some())
            .count();
        texts + dates
    }

    pub fn is_empty(&self) -> bool {
        self.populated_field_count() == 0
    }

    /// Replace every `Some("")` text attribute with `None`.
    pub fn prune_blank(&mut self) {
        for field in TextField::ALL {
            let slot = self.text_mut(*field);
            if is_blank(slot.as_deref()) {
                *slot = None;
            }
        }
    }

    /// First, middle and last name joined by spaces, skipping blank parts.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Name for lists and cards; `"Unknown"` when no name part is set.
    pub fn display_name(&self) -> String {
        let name = self.full_name();
        if name.is_empty() {
            "Unknown".to_string()
        } else {
            name
        }
    }

    /// The number to show next to the name: mobile, then primary,
    /// business, and home.
    pub fn primary_phone(&self) -> Option<&str> {
        [
            &self.mobile_phone,
            &self.primary_phone,
            &self.business_phone,
            &self.home_phone,
        ]
        .into_iter()
        .filter_map(|phone| phone.as_deref())
        .find(|phone| !phone.is_empty())
    }
}
