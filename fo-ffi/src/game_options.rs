// Engine-wide options and callbacks (`FOnline` global).
//
// Field order follows the engine header. String members are
// `ScriptString*` in r476; callbacks are plain function pointers that stay
// null until the engine fills them in.

use std::ffi::c_void;

use crate::angelscript::ScriptString;
use crate::ptr::{FnPtr32, Ptr32};

#[repr(C)]
pub struct GameOptions {
    pub year_start: u16,
    pub year_start_ft_lo: u32,
    pub year_start_ft_hi: u32,
    pub year: u16,
    pub month: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
    pub full_second_start: u32,
    pub full_second: u32,
    pub time_multiplier: u16,
    pub game_time_tick: u32,
    pub disable_tcp_nagle: bool,
    pub disable_zlib_compression: bool,
    pub flood_size: u32,
    pub no_answer_shuffle: bool,
    pub dialog_demand_recheck: bool,
    pub fix_boy_default_experience: u32,
    pub sneak_divider: u32,
    pub level_cap: u32,
    pub level_cap_add_experience: bool,
    pub look_normal: u32,
    pub look_minimum: u32,
    pub global_map_max_group_count: u32,
    pub critter_idle_tick: u32,
    pub turn_based_tick: u32,
    pub dead_hit_points: i32,
    pub breaktime: u32,
    pub timeout_transfer: u32,
    pub timeout_battle: u32,
    pub ap_regeneration: u32,
    pub rt_ap_cost_critter_walk: u32,
    pub rt_ap_cost_critter_run: u32,
    pub rt_ap_cost_move_item_container: u32,
    pub rt_ap_cost_move_item_inventory: u32,
    pub rt_ap_cost_pick_item: u32,
    pub rt_ap_cost_drop_item: u32,
    pub rt_ap_cost_reload_weapon: u32,
    pub rt_ap_cost_pick_critter: u32,
    pub rt_ap_cost_use_item: u32,
    pub rt_ap_cost_use_skill: u32,
    pub rt_always_run: bool,
    pub tb_ap_cost_critter_move: u32,
    pub tb_ap_cost_move_item_container: u32,
    pub tb_ap_cost_move_item_inventory: u32,
    pub tb_ap_cost_pick_item: u32,
    pub tb_ap_cost_drop_item: u32,
    pub tb_ap_cost_reload_weapon: u32,
    pub tb_ap_cost_pick_critter: u32,
    pub tb_ap_cost_use_item: u32,
    pub tb_ap_cost_use_skill: u32,
    pub tb_always_run: bool,
    pub ap_cost_aim_eyes: u32,
    pub ap_cost_aim_head: u32,
    pub ap_cost_aim_groin: u32,
    pub ap_cost_aim_torso: u32,
    pub ap_cost_aim_arms: u32,
    pub ap_cost_aim_legs: u32,
    pub run_on_combat: bool,
    pub run_on_transfer: bool,
    pub global_map_width: u32,
    pub global_map_height: u32,
    pub global_map_zone_length: u32,
    pub global_map_move_time: u32,
    pub bag_refresh_time: u32,
    pub attack_animations_min_dist: u32,
    pub whisper_dist: u32,
    pub shout_dist: u32,
    pub look_checks: i32,
    pub look_dir: [u32; 5],
    pub look_sneak_dir: [u32; 5],
    pub look_weight: u32,
    pub custom_item_cost: bool,
    pub registration_timeout: u32,
    pub account_play_time: u32,
    pub logging_vars: bool,
    pub script_run_suspend_timeout: u32,
    pub script_run_message_timeout: u32,
    pub talk_distance: u32,
    pub npc_max_talkers: u32,
    pub min_name_length: u32,
    pub max_name_length: u32,
    pub dlg_talk_min_time: u32,
    pub dlg_barter_min_time: u32,
    pub minimum_offline_time: u32,
    pub start_special_points: i32,
    pub start_tag_skill_points: i32,
    pub skill_max_value: i32,
    pub skill_mod_add2: i32,
    pub skill_mod_add3: i32,
    pub skill_mod_add4: i32,
    pub skill_mod_add5: i32,
    pub skill_mod_add6: i32,
    pub absolute_offsets: bool,
    pub skill_begin: u32,
    pub skill_end: u32,
    pub timeout_begin: u32,
    pub timeout_end: u32,
    pub kill_begin: u32,
    pub kill_end: u32,
    pub perk_begin: u32,
    pub perk_end: u32,
    pub addiction_begin: u32,
    pub addiction_end: u32,
    pub karma_begin: u32,
    pub karma_end: u32,
    pub damage_begin: u32,
    pub damage_end: u32,
    pub trait_begin: u32,
    pub trait_end: u32,
    pub reputation_begin: u32,
    pub reputation_end: u32,
    pub reputation_loved: i32,
    pub reputation_liked: i32,
    pub reputation_accepted: i32,
    pub reputation_neutral: i32,
    pub reputation_antipathy: i32,
    pub reputation_hated: i32,
    pub map_hexagonal: bool,
    pub map_hex_width: i32,
    pub map_hex_height: i32,
    pub map_hex_line_height: i32,
    pub map_tile_offs_x: i32,
    pub map_tile_offs_y: i32,
    pub map_roof_offs_x: i32,
    pub map_roof_offs_y: i32,
    pub map_roof_skip_size: i32,
    pub map_camera_angle: f32,
    pub map_smooth_path: bool,
    pub map_data_prefix: Ptr32<ScriptString>,
    pub quit: bool,
    pub open_gl_debug: bool,
    pub assimp_logging: bool,
    pub mouse_x: i32,
    pub mouse_y: i32,
    pub scr_ox: i32,
    pub scr_oy: i32,
    pub show_tile: bool,
    pub show_roof: bool,
    pub show_item: bool,
    pub show_scen: bool,
    pub show_wall: bool,
    pub show_crit: bool,
    pub show_fast: bool,
    pub show_player_names: bool,
    pub show_npc_names: bool,
    pub show_crit_id: bool,
    pub scroll_keyb_left: bool,
    pub scroll_keyb_right: bool,
    pub scroll_keyb_up: bool,
    pub scroll_keyb_down: bool,
    pub scroll_mouse_left: bool,
    pub scroll_mouse_right: bool,
    pub scroll_mouse_up: bool,
    pub scroll_mouse_down: bool,
    pub show_groups: bool,
    pub help_info: bool,
    pub debug_info: bool,
    pub debug_net: bool,
    pub debug_sprites: bool,
    pub full_screen: bool,
    pub v_sync: bool,
    pub flush_val: i32,
    pub base_texture: i32,
    pub light: i32,
    pub host: Ptr32<ScriptString>,
    pub port: u32,
    pub proxy_type: u32,
    pub proxy_host: Ptr32<ScriptString>,
    pub proxy_port: u32,
    pub proxy_user: Ptr32<ScriptString>,
    pub proxy_pass: Ptr32<ScriptString>,
    pub name: Ptr32<ScriptString>,
    pub scroll_delay: i32,
    pub scroll_step: u32,
    pub scroll_check: bool,
    pub fo_data_path: Ptr32<ScriptString>,
    pub fixed_fps: i32,
    pub msgbox_invert: bool,
    pub change_lang: i32,
    pub default_combat_mode: u8,
    pub mess_notify: bool,
    pub sound_notify: bool,
    pub always_on_top: bool,
    pub text_delay: u32,
    pub damage_hit_delay: u32,
    pub screen_width: i32,
    pub screen_height: i32,
    pub multi_sampling: i32,
    pub mouse_scroll: bool,
    pub indicator_type: i32,
    pub double_click_time: u32,
    pub roof_alpha: u8,
    pub hide_cursor: bool,
    pub disable_l_menu: bool,
    pub disable_mouse_events: bool,
    pub disable_keyboard_events: bool,
    pub hide_password: bool,
    pub player_off_appendix: Ptr32<ScriptString>,
    pub combat_messages_type: i32,
    pub disable_draw_screens: bool,
    pub animation3d_smooth_time: u32,
    pub animation3d_fps: u32,
    pub run_mod_mul: i32,
    pub run_mod_div: i32,
    pub run_mod_add: i32,
    pub map_zooming: bool,
    pub sprites_zoom: f32,
    pub sprites_zoom_max: f32,
    pub sprites_zoom_min: f32,
    pub effect_values: [f32; 10],
    pub always_run: bool,
    pub always_run_move_dist: i32,
    pub always_run_use_dist: i32,
    pub keyboard_remap: Ptr32<ScriptString>,
    pub critter_fidget_time: u32,
    pub anim2_combat_begin: u32,
    pub anim2_combat_idle: u32,
    pub anim2_combat_end: u32,
    pub client_path: Ptr32<ScriptString>,
    pub server_path: Ptr32<ScriptString>,
    pub show_corners: bool,
    pub show_cutted_sprites: bool,
    pub show_draw_order: bool,
    pub split_tiles_collection: bool,
    pub critter_change_parameter: FnPtr32,
    pub critter_types: Ptr32<c_void>,
    pub client_map: Ptr32<c_void>,
    pub client_map_light: Ptr32<u8>,
    pub client_map_width: u32,
    pub client_map_height: u32,
    pub get_drawing_sprites: FnPtr32,
    pub get_sprite_info: FnPtr32,
    pub get_sprite_color: FnPtr32,
    pub is_sprite_hit: FnPtr32,
    pub get_name_by_hash: FnPtr32,
    pub get_hash_by_name: FnPtr32,
    pub script_load_module: FnPtr32,
    pub script_bind: FnPtr32,
    pub script_prepare: FnPtr32,
    pub script_set_arg_int8: FnPtr32,
    pub script_set_arg_int16: FnPtr32,
    pub script_set_arg_int: FnPtr32,
    pub script_set_arg_int64: FnPtr32,
    pub script_set_arg_uint8: FnPtr32,
    pub script_set_arg_uint16: FnPtr32,
    pub script_set_arg_uint: FnPtr32,
    pub script_set_arg_uint64: FnPtr32,
    pub script_set_arg_bool: FnPtr32,
    pub script_set_arg_float: FnPtr32,
    pub script_set_arg_double: FnPtr32,
    pub script_set_arg_object: FnPtr32,
    pub script_set_arg_address: FnPtr32,
    pub script_run_prepared: FnPtr32,
    pub script_get_returned_int8: FnPtr32,
    pub script_get_returned_int16: FnPtr32,
    pub script_get_returned_int: FnPtr32,
    pub script_get_returned_int64: FnPtr32,
    pub script_get_returned_uint8: FnPtr32,
    pub script_get_returned_uint16: FnPtr32,
    pub script_get_returned_uint: FnPtr32,
    pub script_get_returned_uint64: FnPtr32,
    pub script_get_returned_bool: FnPtr32,
    pub script_get_returned_float: FnPtr32,
    pub script_get_returned_double: FnPtr32,
    pub script_get_returned_object: FnPtr32,
    pub script_get_returned_address: FnPtr32,
    pub get_use_ap_cost: FnPtr32,
    pub get_attack_distantion: FnPtr32,
    /// Unmapped tail bytes. The r476 build is 68 bytes larger than the
    /// members above; their contents are not known.
    _unknown: [u32; 17],
}

impl GameOptions {
    /// Whether the engine has published its script-call bridge yet.
    pub const fn script_bridge_ready(&self) -> bool {
        self.script_bind.is_set() && self.script_prepare.is_set() && self.script_run_prepared.is_set()
    }
}
