// Server-side critter (player or NPC).
//
// `CritterData` is the block the engine persists to disk; the members after
// it in `Critter` only exist while the server runs.

use std::ffi::c_void;

use crate::angelscript::ScriptString;
use crate::item::ItemVec;
use crate::ptr::Ptr32;
use crate::stl::{IntVec, StdMap, StdVector, UintSet};

/// Number of critter parameters (stats, skills, perks, timeouts, ...).
pub const MAX_PARAMS: usize = 1000;

pub type CrVec = StdVector<Ptr32<Critter>>;
/// Critters keyed by id.
pub type CrMap = StdMap<u32, Ptr32<Critter>>;
pub type CritterTimeEventVec = StdVector<CritterTimeEvent>;

/// Engine-side synchronisation handle.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct SyncObj {
    pub cur_mngr: Ptr32<c_void>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Spinlock {
    pub locker: i32,
}

/// One row of an NPC's bag template.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct BagEntry {
    pub item_pid: u32,
    pub min_count: u32,
    pub max_count: u32,
    pub item_slot: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CritterData {
    pub id: u32,
    pub hex_x: u16,
    pub hex_y: u16,
    pub world_x: u16,
    pub world_y: u16,
    pub base_type: u32,
    pub dir: u8,
    pub cond: u8,
    pub reserved_ce: u8,
    pub reserved0: u8,
    pub script_id: u32,
    pub show_critter_dist: [u32; 3],
    pub reserved00: u16,
    pub multihex: i16,
    pub global_group_uid: u32,
    pub last_hex_x: u16,
    pub last_hex_y: u16,
    pub reserved1: [u32; 4],
    pub map_id: u32,
    pub map_pid: u16,
    pub reserved2: u16,
    pub params: [i32; MAX_PARAMS],
    pub anim1_life: u32,
    pub anim1_knockout: u32,
    pub anim1_dead: u32,
    pub anim2_life: u32,
    pub anim2_knockout: u32,
    pub anim2_dead: u32,
    pub anim2_knockout_end: u32,
    pub reserved3: [u32; 3],
    pub lexems: [u8; 128],
    pub reserved4: [u32; 8],
    pub client_to_delete: bool,
    pub reserved5: u8,
    pub reserved6: u16,
    pub temp: u32,
    pub reserved8: u16,
    pub holo_info_count: u16,
    pub holo_info: [u32; 250],
    pub reserved9: [u32; 10],
    pub scores: [i32; 50],
    pub global_map_move_counter: u32,
    pub user_data: [u8; 396],
    pub home_map: u32,
    pub home_x: u16,
    pub home_y: u16,
    pub home_dir: u8,
    pub reserved11: u8,
    pub proto_id: u16,
    pub reserved12: [u32; 4],
    pub is_data_ext: bool,
    pub reserved16: u8,
    pub reserved17: u16,
    pub reserved18: [u32; 8],
    pub favorite_item_pid: [u16; 4],
    pub reserved19: [u32; 10],
    pub enemy_stack_count: u32,
    pub enemy_stack: [u32; 30],
    pub reserved20: [u32; 5],
    pub bag_current_set: [u8; 20],
    pub bag_refresh_time: i16,
    pub reserved21: u8,
    pub bag_size: u8,
    pub bag: [BagEntry; 50],
    pub reserved22: [u32; 100],
}

/// Player-only extension, allocated on demand (`data_ext`).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct CritterDataExt {
    pub reserved23: [u32; 10],
    pub global_map_fog: [u8; 2500],
    pub reserved24: u16,
    pub locations_count: u16,
    pub locations_id: [u32; 1000],
    pub reserved25: [u32; 40],
    pub play_ip: [u32; 20],
    pub play_port: [u16; 20],
    pub current_ip: u32,
    pub reserved26: [u32; 29],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalMapFog {
    pub is_alloc: bool,
    pub data: Ptr32<u8>,
    pub width: u32,
    pub height: u32,
    pub width_bytes: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct CritterTimeEvent {
    pub func_num: u32,
    pub rate: u32,
    pub next_time: u32,
    pub identifier: i32,
}

/// Opaque `GlobalMapGroup`.
#[repr(C)]
pub struct GlobalMapGroup {
    _private: [u8; 0],
}

#[repr(C)]
pub struct Critter {
    pub data: CritterData,
    pub data_ext: Ptr32<CritterDataExt>,
    pub sync: SyncObj,
    pub critter_is_npc: bool,
    pub flags: u32,
    pub name_str: ScriptString,
    pub gmap_fog: GlobalMapFog,
    pub is_running: bool,
    pub prev_hex_tick: u32,
    pub prev_hex_x: u16,
    pub prev_hex_y: u16,
    pub lock_map_transfers: i32,
    pub this_ptr: [Ptr32<Critter>; 100],
    pub allowed_to_download_map: u32,
    pub params_is_changed: [bool; MAX_PARAMS],
    pub params_changed: IntVec,
    pub param_locked: i32,
    pub vis_cr: CrVec,
    pub vis_cr_self: CrVec,
    pub vis_cr1: UintSet,
    pub vis_cr2: UintSet,
    pub vis_cr3: UintSet,
    pub vis_item: UintSet,
    pub vis_item_locker: Spinlock,
    pub view_map_id: u32,
    pub view_map_pid: u16,
    pub view_map_look: u16,
    pub view_map_hx: u16,
    pub view_map_hy: u16,
    pub view_map_dir: u8,
    pub view_map_loc_id: u32,
    pub view_map_loc_ent: u32,
    pub group_self: Ptr32<GlobalMapGroup>,
    pub group_move: Ptr32<GlobalMapGroup>,
    pub inv_items: ItemVec,
    pub def_item_slot_hand: Ptr32<c_void>,
    pub def_item_slot_armor: Ptr32<c_void>,
    pub item_slot_main: Ptr32<c_void>,
    pub item_slot_ext: Ptr32<c_void>,
    pub item_slot_armor: Ptr32<c_void>,
    pub func_id: [i32; 44],
    pub knockout_ap: u32,
    pub next_intellect_caching_tick: u32,
    pub intellect_cache_value: u16,
    pub look_cache_value: u32,
    pub start_break_time: u32,
    pub break_time: u32,
    pub wait_end_tick: u32,
    pub disable_send: i32,
    pub access_container_id: u32,
    pub item_transfer_count: u32,
    pub trying_go_home_tick: u32,
    pub cr_time_events: CritterTimeEventVec,
    pub global_idle_next_tick: u32,
    pub ap_regeneration_tick: u32,
    pub is_not_valid: bool,
    pub ref_counter: i32,
}

impl Critter {
    /// `COND_DEAD` in the engine's defines.
    pub const COND_DEAD: u8 = 3;

    pub const fn is_valid(&self) -> bool {
        !self.is_not_valid
    }

    pub const fn is_npc(&self) -> bool {
        self.critter_is_npc
    }

    pub const fn is_dead(&self) -> bool {
        self.data.cond == Self::COND_DEAD
    }

    pub fn param(&self, index: usize) -> Option<i32> {
        self.data.params.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn persisted_block_precedes_runtime_members() {
        assert_eq!(size_of::<CritterData>(), 7404);
        assert_eq!(offset_of!(Critter, data_ext), 7404);
    }

    #[test]
    fn params_offset_matches_engine() {
        assert_eq!(offset_of!(CritterData, params), 72);
    }

    #[test]
    fn helper_struct_sizes() {
        assert_eq!(size_of::<BagEntry>(), 16);
        assert_eq!(size_of::<GlobalMapFog>(), 20);
        assert_eq!(size_of::<CritterTimeEvent>(), 16);
    }
}
