// Items. The leading `ItemHead` is shared; the rest differs per build target.

use fo_layout_facts::BuildTarget;

use crate::angelscript::ScriptString;
use crate::critter::SyncObj;
use crate::ptr::Ptr32;
use crate::stl::StdVector;

/// Vector of item pointers. The pointee is the shared head, which is a
/// valid prefix of either target's `Item`.
pub type ItemVec = StdVector<Ptr32<ItemHead>>;

/// Where an item currently lives.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accessory {
    None = 0,
    Critter = 1,
    Hex = 2,
    Container = 3,
}

impl Accessory {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Accessory::None),
            1 => Some(Accessory::Critter),
            2 => Some(Accessory::Hex),
            3 => Some(Accessory::Container),
            _ => None,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AccHex {
    pub map_id: u32,
    pub hex_x: u16,
    pub hex_y: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AccCritter {
    pub id: u32,
    pub slot: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AccContainer {
    pub container_id: u32,
    pub stack_id: u32,
}

/// Location payload, discriminated by `ItemHead::accessory`.
#[repr(C)]
#[derive(Clone, Copy)]
pub union AccessoryData {
    pub hex: AccHex,
    pub critter: AccCritter,
    pub container: AccContainer,
    pub buffer: [u8; 8],
}

/// Per-instance item state saved with the world.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ItemData {
    pub sort_value: u16,
    pub info: u8,
    pub indicator: u8,
    pub pic_map_hash: u32,
    pub pic_inv_hash: u32,
    pub anim_wait_base: u16,
    pub anim_stay: [u8; 2],
    pub anim_show: [u8; 2],
    pub anim_hide: [u8; 2],
    pub flags: u32,
    pub rate: u8,
    pub light_intensity: i8,
    pub light_distance: u8,
    pub light_flags: u8,
    pub light_color: u32,
    pub script_id: u16,
    pub trap_value: i16,
    pub count: u32,
    pub cost: u32,
    pub script_values: [i32; 10],
    pub broken_flags: u8,
    pub broken_count: u8,
    pub deterioration: u16,
    pub ammo_pid: u16,
    pub ammo_count: u16,
    pub locker_id: u32,
    pub locker_condition: u16,
    pub locker_complexity: u16,
    pub holodisk_number: u32,
    pub radio_channel: u16,
    pub radio_flags: u16,
    pub radio_broadcast_send: u8,
    pub radio_broadcast_recv: u8,
    pub charge: u16,
    pub offset_x: i16,
    pub offset_y: i16,
    pub dir: i16,
    pub reserved: [u8; 2],
}

impl ItemData {
    pub const MAX_DETERIORATION: u16 = 10000;

    /// Wear in percent, clamped to 0..=100.
    pub const fn deterioration_percent(&self) -> u16 {
        let pct = self.deterioration as u32 * 100 / Self::MAX_DETERIORATION as u32;
        if pct > 100 { 100 } else { pct as u16 }
    }
}

/// Opaque `ProtoItem`.
#[repr(C)]
pub struct ProtoItem {
    _private: [u8; 0],
}

/// Members common to the server and client `Item`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ItemHead {
    pub id: u32,
    pub proto: Ptr32<ProtoItem>,
    pub from: i32,
    pub accessory: u8,
    pub view_place_on_map: bool,
    pub reserved0: i16,
    pub acc: AccessoryData,
    pub data: ItemData,
}

impl ItemHead {
    pub const fn accessory(&self) -> Option<Accessory> {
        Accessory::from_raw(self.accessory)
    }

    /// Map position, if the item lies on a hex.
    pub fn hex(&self) -> Option<AccHex> {
        match self.accessory() {
            // SAFETY: the engine writes `acc.hex` whenever accessory is Hex.
            Some(Accessory::Hex) => Some(unsafe { self.acc.hex }),
            _ => None,
        }
    }
}

pub mod server {
    use super::*;

    /// `Item` as compiled with `__SERVER`.
    #[repr(C)]
    pub struct Item {
        pub head: ItemHead,
        pub lexems: Ptr32<ScriptString>,
        pub child_objects: Ptr32<ItemVec>,
        pub sync: SyncObj,
        /// Unmapped server-only bytes between `sync` and `ref_counter`.
        _unknown: [u32; 9],
        pub ref_counter: i16,
        pub is_not_valid: bool,
    }

    impl Item {
        pub const TARGET: BuildTarget = BuildTarget::Server;

        pub const fn is_valid(&self) -> bool {
            !self.is_not_valid
        }
    }
}

pub mod client {
    use super::*;

    /// `Item` as compiled with `__CLIENT`.
    #[repr(C)]
    pub struct Item {
        pub head: ItemHead,
        pub lexems: Ptr32<ScriptString>,
        pub ref_counter: i16,
        pub is_not_valid: bool,
    }

    impl Item {
        pub const TARGET: BuildTarget = BuildTarget::Client;

        pub const fn is_valid(&self) -> bool {
            !self.is_not_valid
        }
    }
}

/// Size of the `Item` mirror for `target`.
pub const fn item_size(target: BuildTarget) -> usize {
    match target {
        BuildTarget::Server => std::mem::size_of::<server::Item>(),
        BuildTarget::Client => std::mem::size_of::<client::Item>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn head_and_data_sizes() {
        assert_eq!(size_of::<ItemData>(), 120);
        assert_eq!(size_of::<ItemHead>(), 144);
        assert_eq!(size_of::<AccessoryData>(), 8);
    }

    #[test]
    fn data_follows_accessory_union() {
        assert_eq!(offset_of!(ItemHead, acc), 16);
        assert_eq!(offset_of!(ItemHead, data), 24);
    }

    #[test]
    fn item_size_follows_target() {
        assert_eq!(item_size(BuildTarget::Server), 196);
        assert_eq!(item_size(BuildTarget::Client), 152);
    }

    #[test]
    fn deterioration_is_clamped() {
        let mut data: ItemData = unsafe { std::mem::zeroed() };
        data.deterioration = 5000;
        assert_eq!(data.deterioration_percent(), 50);
        data.deterioration = 20000;
        assert_eq!(data.deterioration_percent(), 100);
    }

    #[test]
    fn accessory_decoding() {
        assert_eq!(Accessory::from_raw(2), Some(Accessory::Hex));
        assert_eq!(Accessory::from_raw(9), None);
    }
}
