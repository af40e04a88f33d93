//! # Static option-key → topic mapping.
//!
//! Config changes are published under a hierarchical address mirroring the
//! settings UI: `config/{page}/{group}/{key}`. The mapping is a pure data
//! artifact — a static table from option key to its page and group — with a
//! `config/unknown/{key}` fallback for keys the table does not carry.

use std::collections::HashMap;

/// `(key, page, group)` rows for every known option key.
const TOPIC_TABLE: &[(&str, &str, &str)] = &[
    // Quality / layer height
    ("layer_height", "quality", "layer_height"),
    ("initial_layer_print_height", "quality", "layer_height"),
    // Quality / line width
    ("line_width", "quality", "line_width"),
    ("initial_layer_line_width", "quality", "line_width"),
    ("outer_wall_line_width", "quality", "line_width"),
    ("inner_wall_line_width", "quality", "line_width"),
    ("top_surface_line_width", "quality", "line_width"),
    ("sparse_infill_line_width", "quality", "line_width"),
    ("internal_solid_infill_line_width", "quality", "line_width"),
    ("support_line_width", "quality", "line_width"),
    // Quality / seam
    ("seam_position", "quality", "seam"),
    ("seam_gap", "quality", "seam"),
    ("seam_slope_type", "quality", "seam"),
    ("seam_slope_conditional", "quality", "seam"),
    ("scarf_angle_threshold", "quality", "seam"),
    ("seam_slope_entire_loop", "quality", "seam"),
    ("seam_slope_steps", "quality", "seam"),
    ("seam_slope_inner_walls", "quality", "seam"),
    ("seam_slope_start_height", "quality", "seam"),
    ("seam_slope_gap", "quality", "seam"),
    ("seam_slope_min_length", "quality", "seam"),
    ("wipe_speed", "quality", "seam"),
    // Quality / precision
    ("slice_closing_radius", "quality", "precision"),
    ("resolution", "quality", "precision"),
    ("enable_arc_fitting", "quality", "precision"),
    ("xy_hole_compensation", "quality", "precision"),
    ("xy_contour_compensation", "quality", "precision"),
    ("elefant_foot_compensation", "quality", "precision"),
    ("precise_outer_wall", "quality", "precision"),
    ("precise_z_height", "quality", "precision"),
    // Quality / ironing
    ("ironing_type", "quality", "ironing"),
    ("ironing_pattern", "quality", "ironing"),
    ("ironing_speed", "quality", "ironing"),
    ("ironing_flow", "quality", "ironing"),
    ("ironing_spacing", "quality", "ironing"),
    ("ironing_inset", "quality", "ironing"),
    // Quality / wall generator
    ("wall_generator", "quality", "wall_generator"),
    ("wall_transition_angle", "quality", "wall_generator"),
    ("wall_transition_filter_deviation", "quality", "wall_generator"),
    ("wall_transition_length", "quality", "wall_generator"),
    ("wall_distribution_count", "quality", "wall_generator"),
    ("min_bead_width", "quality", "wall_generator"),
    ("min_feature_size", "quality", "wall_generator"),
    // Quality / advanced
    ("wall_sequence", "quality", "advanced"),
    ("is_infill_first", "quality", "advanced"),
    ("bridge_flow", "quality", "advanced"),
    ("thick_bridges", "quality", "advanced"),
    ("print_flow_ratio", "quality", "advanced"),
    ("top_solid_infill_flow_ratio", "quality", "advanced"),
    ("initial_layer_flow_ratio", "quality", "advanced"),
    ("detect_overhang_wall", "quality", "advanced"),
    ("reduce_crossing_wall", "quality", "advanced"),
    ("max_travel_detour_distance", "quality", "advanced"),
    // Strength / walls
    ("wall_loops", "strength", "walls"),
    ("embedding_wall_into_infill", "strength", "walls"),
    ("detect_thin_wall", "strength", "walls"),
    // Strength / top & bottom shells
    ("interface_shells", "strength", "top_bottom_shells"),
    ("top_surface_pattern", "strength", "top_bottom_shells"),
    ("top_shell_layers", "strength", "top_bottom_shells"),
    ("top_shell_thickness", "strength", "top_bottom_shells"),
    ("bottom_surface_pattern", "strength", "top_bottom_shells"),
    ("bottom_shell_layers", "strength", "top_bottom_shells"),
    ("bottom_shell_thickness", "strength", "top_bottom_shells"),
    ("internal_solid_infill_pattern", "strength", "top_bottom_shells"),
    // Strength / sparse infill
    ("sparse_infill_density", "strength", "sparse_infill"),
    ("sparse_infill_pattern", "strength", "sparse_infill"),
    ("infill_shift_step", "strength", "sparse_infill"),
    ("infill_rotate_step", "strength", "sparse_infill"),
    ("sparse_infill_anchor", "strength", "sparse_infill"),
    ("sparse_infill_anchor_max", "strength", "sparse_infill"),
    ("filter_out_gap_fill", "strength", "sparse_infill"),
    // Strength / advanced
    ("infill_wall_overlap", "strength", "advanced"),
    ("infill_direction", "strength", "advanced"),
    ("bridge_angle", "strength", "advanced"),
    ("minimum_sparse_infill_area", "strength", "advanced"),
    ("infill_combination", "strength", "advanced"),
    ("ensure_vertical_shell_thickness", "strength", "advanced"),
    // Speed / initial layer
    ("initial_layer_speed", "speed", "initial_layer"),
    ("initial_layer_infill_speed", "speed", "initial_layer"),
    // Speed / other layers
    ("outer_wall_speed", "speed", "other_layers"),
    ("inner_wall_speed", "speed", "other_layers"),
    ("small_perimeter_speed", "speed", "other_layers"),
    ("sparse_infill_speed", "speed", "other_layers"),
    ("internal_solid_infill_speed", "speed", "other_layers"),
    ("top_surface_speed", "speed", "other_layers"),
    ("enable_overhang_speed", "speed", "other_layers"),
    ("bridge_speed", "speed", "other_layers"),
    ("gap_infill_speed", "speed", "other_layers"),
    ("support_speed", "speed", "other_layers"),
    ("support_interface_speed", "speed", "other_layers"),
    // Speed / travel
    ("travel_speed", "speed", "travel"),
    // Speed / acceleration
    ("default_acceleration", "speed", "acceleration"),
    ("travel_acceleration", "speed", "acceleration"),
    ("initial_layer_acceleration", "speed", "acceleration"),
    ("outer_wall_acceleration", "speed", "acceleration"),
    ("inner_wall_acceleration", "speed", "acceleration"),
    ("top_surface_acceleration", "speed", "acceleration"),
    ("sparse_infill_acceleration", "speed", "acceleration"),
    // Speed / jerk
    ("default_jerk", "speed", "jerk"),
    ("outer_wall_jerk", "speed", "jerk"),
    ("inner_wall_jerk", "speed", "jerk"),
    ("infill_jerk", "speed", "jerk"),
    ("top_surface_jerk", "speed", "jerk"),
    ("initial_layer_jerk", "speed", "jerk"),
    ("travel_jerk", "speed", "jerk"),
    // Support / general
    ("enable_support", "support", "general"),
    ("support_type", "support", "general"),
    ("support_style", "support", "general"),
    ("support_threshold_angle", "support", "general"),
    ("support_on_build_plate_only", "support", "general"),
    // Support / raft
    ("raft_layers", "support", "raft"),
    ("raft_contact_distance", "support", "raft"),
    // Support / filament
    ("support_filament", "support", "filament"),
    ("support_interface_filament", "support", "filament"),
    // Support / advanced
    ("support_top_z_distance", "support", "advanced"),
    ("support_bottom_z_distance", "support", "advanced"),
    ("support_base_pattern", "support", "advanced"),
    ("support_base_pattern_spacing", "support", "advanced"),
    ("support_angle", "support", "advanced"),
    ("support_interface_top_layers", "support", "advanced"),
    ("support_interface_bottom_layers", "support", "advanced"),
    ("support_interface_pattern", "support", "advanced"),
    ("support_interface_spacing", "support", "advanced"),
    ("support_expansion", "support", "advanced"),
    ("support_object_xy_distance", "support", "advanced"),
    ("bridge_no_support", "support", "advanced"),
    ("max_bridge_length", "support", "advanced"),
    ("independent_support_layer_height", "support", "advanced"),
    // Support / tree support
    ("tree_support_branch_distance", "support", "tree_support"),
    ("tree_support_branch_diameter", "support", "tree_support"),
    ("tree_support_branch_angle", "support", "tree_support"),
    ("tree_support_wall_count", "support", "tree_support"),
    // Others / bed adhesion
    ("skirt_loops", "others", "bed_adhesion"),
    ("skirt_height", "others", "bed_adhesion"),
    ("skirt_distance", "others", "bed_adhesion"),
    ("brim_type", "others", "bed_adhesion"),
    ("brim_width", "others", "bed_adhesion"),
    ("brim_object_gap", "others", "bed_adhesion"),
    // Others / prime tower
    ("enable_prime_tower", "others", "prime_tower"),
    ("prime_tower_width", "others", "prime_tower"),
    ("prime_tower_brim_width", "others", "prime_tower"),
    ("prime_tower_infill_gap", "others", "prime_tower"),
    // Others / flush options
    ("flush_into_infill", "others", "flush_options"),
    ("flush_into_objects", "others", "flush_options"),
    ("flush_into_support", "others", "flush_options"),
    // Others / special mode
    ("slicing_mode", "others", "special_mode"),
    ("print_sequence", "others", "special_mode"),
    ("spiral_mode", "others", "special_mode"),
    ("spiral_mode_smooth", "others", "special_mode"),
    ("timelapse_type", "others", "special_mode"),
    ("fuzzy_skin", "others", "special_mode"),
    ("fuzzy_skin_point_distance", "others", "special_mode"),
    ("fuzzy_skin_thickness", "others", "special_mode"),
    // Others / advanced
    ("interlocking_beam", "others", "advanced"),
    ("interlocking_beam_width", "others", "advanced"),
    ("interlocking_depth", "others", "advanced"),
    ("sparse_infill_filament", "others", "advanced"),
    ("solid_infill_filament", "others", "advanced"),
    ("wall_filament", "others", "advanced"),
    // Others / g-code output
    ("reduce_infill_retraction", "others", "gcode_output"),
    ("exclude_object", "others", "gcode_output"),
    ("filename_format", "others", "gcode_output"),
    ("post_process", "others", "gcode_output"),
    ("process_notes", "others", "gcode_output"),
];

/// Lookup from option key to its `config/{page}/{group}/{key}` address.
///
/// Built once from the static table; no global state, construct it where the
/// publisher is constructed.
pub struct ConfigTopicMap {
    map: HashMap<&'static str, (&'static str, &'static str)>,
}

impl Default for ConfigTopicMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigTopicMap {
    /// Builds the map from the built-in table.
    pub fn new() -> Self {
        let map = TOPIC_TABLE
            .iter()
            .map(|&(key, page, group)| (key, (page, group)))
            .collect();
        Self { map }
    }

    /// Topic for a config key; unknown keys fall back to `config/unknown/{key}`.
    pub fn topic_for(&self, key: &str) -> String {
        match self.map.get(key) {
            Some((page, group)) => format!("config/{page}/{group}/{key}"),
            None => format!("config/unknown/{key}"),
        }
    }

    /// Whether the table carries this key.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Number of known keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table is empty (never, with the built-in table).
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
