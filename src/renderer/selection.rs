/// Kind of a physical device, in order of preference.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DeviceKind {
    Discrete,
    Integrated,
    Virtual,
    Cpu,
    Other,
}

/// Summary of a physical device, as seen by the device selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCandidate {
    /// Vendor id in the 32 most significant bits, device id in the 32 least significant ones.
    pub id: u64,
    pub name: String,
    pub kind: DeviceKind,
    /// Whether at least one queue family supports graphics operations.
    pub has_graphics: bool,
}

impl DeviceCandidate {
    /// Composes the id used by [RendererConfig](crate::renderer::RendererConfig) to pick a device.
    pub fn compose_id(vendor_id: u32, device_id: u32) -> u64 {
        (vendor_id as u64) << 32 | device_id as u64
    }
}

/// Selects the best suited device and returns its index in `candidates`.
///
/// If `preferred` is set and a compatible device with that id exists, that device is chosen.
/// Otherwise dedicated devices are preferred over integrated ones, then virtual and CPU devices.
/// Among devices of the same kind the first one enumerated wins.
///
/// Devices without graphics support are never selected. Returns None if no device is compatible.
pub fn select_device(candidates: &[DeviceCandidate], preferred: Option<u64>) -> Option<usize> {
    let compatible = candidates
        .iter()
        .enumerate()
        .filter(|(_, device)| device.has_graphics);
    if let Some(id) = preferred {
        match lookup(candidates, id) {
            Lookup::Found(index) => return Some(index),
            Lookup::Incompatible(index) => log::error!(
                "Device {} (id {}) has no graphics queue. Using default device.",
                candidates[index].name,
                id
            ),
            Lookup::Missing => {
                log::error!("Could not find device with id {}. Using default device.", id)
            }
        }
    }
    compatible
        .min_by_key(|(_, device)| device.kind)
        .map(|(index, _)| index)
}

#[derive(Debug, PartialEq, Eq)]
enum Lookup {
    Found(usize),
    Incompatible(usize),
    Missing,
}

fn lookup(candidates: &[DeviceCandidate], id: u64) -> Lookup {
    let with_id = || candidates.iter().enumerate().filter(|(_, d)| d.id == id);
    if let Some((index, _)) = with_id().find(|(_, d)| d.has_graphics) {
        Lookup::Found(index)
    } else if let Some((index, _)) = with_id().next() {
        Lookup::Incompatible(index)
    } else {
        Lookup::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::{lookup, select_device, DeviceCandidate, DeviceKind, Lookup};

    fn candidate(id: u64, kind: DeviceKind, has_graphics: bool) -> DeviceCandidate {
        DeviceCandidate {
            id,
            name: format!("gpu{}", id),
            kind,
            has_graphics,
        }
    }

    #[test]
    fn prefers_discrete() {
        let devices = [
            candidate(1, DeviceKind::Integrated, true),
            candidate(2, DeviceKind::Discrete, true),
            candidate(3, DeviceKind::Cpu, true),
        ];
        assert_eq!(select_device(&devices, None), Some(1));
    }

    #[test]
    fn falls_back_to_integrated() {
        let devices = [
            candidate(1, DeviceKind::Cpu, true),
            candidate(2, DeviceKind::Discrete, false),
            candidate(3, DeviceKind::Integrated, true),
        ];
        assert_eq!(select_device(&devices, None), Some(2));
    }

    #[test]
    fn first_enumerated_wins_ties() {
        let devices = [
            candidate(1, DeviceKind::Discrete, true),
            candidate(2, DeviceKind::Discrete, true),
        ];
        assert_eq!(select_device(&devices, None), Some(0));
    }

    #[test]
    fn preferred_id() {
        let devices = [
            candidate(1, DeviceKind::Discrete, true),
            candidate(2, DeviceKind::Integrated, true),
        ];
        assert_eq!(select_device(&devices, Some(2)), Some(1));
    }

    #[test]
    fn missing_preferred_id_uses_default() {
        let devices = [
            candidate(1, DeviceKind::Integrated, true),
            candidate(2, DeviceKind::Discrete, true),
        ];
        assert_eq!(select_device(&devices, Some(42)), Some(1));
    }

    #[test]
    fn preferred_without_graphics_is_ignored() {
        let devices = [
            candidate(1, DeviceKind::Discrete, false),
            candidate(2, DeviceKind::Integrated, true),
        ];
        assert_eq!(select_device(&devices, Some(1)), Some(1));
    }

    #[test]
    fn lookup_tells_missing_from_incompatible() {
        let devices = [
            candidate(1, DeviceKind::Discrete, false),
            candidate(2, DeviceKind::Integrated, true),
        ];
        assert_eq!(lookup(&devices, 1), Lookup::Incompatible(0));
        assert_eq!(lookup(&devices, 2), Lookup::Found(1));
        assert_eq!(lookup(&devices, 3), Lookup::Missing);
    }

    #[test]
    fn lookup_same_id_picks_compatible() {
        let devices = [
            candidate(7, DeviceKind::Discrete, false),
            candidate(7, DeviceKind::Discrete, true),
        ];
        assert_eq!(lookup(&devices, 7), Lookup::Found(1));
        assert_eq!(select_device(&devices, Some(7)), Some(1));
    }

    #[test]
    fn nothing_compatible() {
        let devices = [candidate(1, DeviceKind::Discrete, false)];
        assert_eq!(select_device(&devices, None), None);
        assert_eq!(select_device(&[], None), None);
    }

    #[test]
    fn compose_id() {
        assert_eq!(DeviceCandidate::compose_id(0x10DE, 0x2204), 0x10DE_0000_2204);
    }
}
