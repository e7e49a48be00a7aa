//! Naming validators
//!
//! Validators for hostname-style identifiers per RFC 1123.

mod dns;

pub use dns::{
    DNS1123_LABEL_FMT, DNS1123_LABEL_MAX_LENGTH, DNS1123_SUBDOMAIN_MAX_LENGTH, Dns1123Label,
    Dns1123Subdomain, check_dns1123_subdomain, dns1123_label, dns1123_subdomain,
};
