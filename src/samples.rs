//! Built-in sample specifications, served when the remote sample endpoint is down.

use crate::phone::{Battery, ExpandableStorage, SmartphoneSpecification};

pub fn builtin() -> Vec<SmartphoneSpecification> {
    vec![
        SmartphoneSpecification {
            internal_storage: 256.0,
            storage_ram: 8.0,
            expandable_storage: ExpandableStorage::Terabytes(1.0),
            primary_camera: "108MP + 12MP + 5MP + 5MP".to_string(),
            display: "Full HD+ Dynamic AMOLED 2X DisplayHD".to_string(),
            network: "5G, 4G, 3G, 2G".to_string(),
            battery: Battery::Capacity(5000.0),
        },
        SmartphoneSpecification {
            internal_storage: 64.0,
            storage_ram: 8.0,
            expandable_storage: ExpandableStorage::NotApplicable,
            primary_camera: "50MP + 10MP + 12MP".to_string(),
            display: "LCDHD".to_string(),
            network: "4G, 3G, 2G".to_string(),
            battery: Battery::Capacity(6000.0),
        },
        SmartphoneSpecification {
            internal_storage: 100.0,
            storage_ram: 12.0,
            expandable_storage: ExpandableStorage::Terabytes(1.0),
            primary_camera: "108MP + 8MP + 2MP".to_string(),
            display: "Full HD+ Super AMOLED Plus DisplayHD".to_string(),
            network: "5G, 4G, 3G, 2G".to_string(),
            battery: Battery::Capacity(4400.0),
        },
    ]
}
