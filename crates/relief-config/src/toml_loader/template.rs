//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Relief Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Relief"
# width = 1280
# height = 800
# startup_mode = "windowed"   # windowed, maximized, fullscreen
# max_pixel_ratio = 2.0       # 0.5-4.0
# vsync = true
# background = "#000000"

[camera]
# fov = 75.0                  # 1-179 degrees
# near = 0.1
# far = 100.0
# position = [1.0, 1.0, 3.0]

[controls]
# enable_damping = true
# damping_factor = 0.05       # 0.0-1.0
# rotate_speed = 1.0
# zoom_speed = 1.0
# pan_speed = 1.0
# min_distance = 0.0
# max_distance = 100.0

[text]
# initial = "This is Three.js"
# size = 0.5
# depth = 0.2
# curve_segments = 12         # 1-64
# anchor_factor = 0.2

[text.bevel]
# enabled = true
# thickness = 0.03
# size = 0.02
# offset = 0.0
# segments = 5                # 1-32

[assets]
# font = "assets/fonts/helvetiker_regular.typeface.json"
# matcap = "assets/textures/matcaps/8.png"

[input]
# debounce_ms = 0             # 0 rebuilds on every key press

[logging]
# level = "relief=info"
"##
    .to_string()
}
