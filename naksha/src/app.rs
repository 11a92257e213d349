//! Desktop front end.
//!
//! Key bindings:
//!
//! | Key | Action |
//! |-----|--------|
//! | Arrow keys | Move cursor one cell |
//! | Space | Toggle cell under cursor |
//! | Ctrl/Cmd+Z | Undo last toggle |
//! | Ctrl/Cmd+O | Load map folder |
//! | Ctrl/Cmd+S | Save map |
//!
//! The map texture is only recomposed when the session changes or the
//! central panel is resized.

use std::path::Path;

use eframe::egui::{
    self, ColorImage, Key, Modifiers, RichText, TextureHandle, TextureOptions, load::SizedTexture,
};

use crate::core::Direction;
use crate::editor::{Command, MapEditor};
use crate::render::ViewBounds;

/// Something the user asked for with the keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Editing command for the session
    Edit(Command),
    /// Pick a map folder and load it
    Load,
    /// Save over the loaded bitmap
    Save,
}

/// Key binding table
pub fn action_for_key(key: Key, modifiers: Modifiers) -> Option<Action> {
    if modifiers.command {
        return match key {
            Key::Z if !modifiers.shift => Some(Action::Edit(Command::Undo)),
            Key::O => Some(Action::Load),
            Key::S => Some(Action::Save),
            _ => None,
        };
    }

    match key {
        Key::ArrowLeft => Some(Action::Edit(Command::Move(Direction::Left))),
        Key::ArrowRight => Some(Action::Edit(Command::Move(Direction::Right))),
        Key::ArrowUp => Some(Action::Edit(Command::Move(Direction::Up))),
        Key::ArrowDown => Some(Action::Edit(Command::Move(Direction::Down))),
        Key::Space => Some(Action::Edit(Command::Toggle)),
        _ => None,
    }
}

/// eframe application wrapping a [`MapEditor`]
pub struct MapEditorApp {
    editor: MapEditor,
    texture: Option<TextureHandle>,
    /// Bounds the current texture was composed for
    rendered_for: Option<ViewBounds>,
    /// Session changed since the texture was composed
    stale: bool,
    status: String,
    title: String,
}

impl MapEditorApp {
    /// Create the app around an editor
    pub fn new(editor: MapEditor) -> Self {
        Self {
            editor,
            texture: None,
            rendered_for: None,
            stale: true,
            status: "Load a map folder to begin".to_string(),
            title: String::new(),
        }
    }

    /// Load the map in `dir`, reporting the outcome in the status bar
    pub fn load_folder(&mut self, dir: &Path) {
        match self.editor.load(dir) {
            Ok(true) => {
                self.status = format!("Loaded {}", dir.display());
                self.stale = true;
            }
            Ok(false) => {
                self.status = format!("No map (metadata + image) found in {}", dir.display());
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", dir.display(), e);
                self.status = format!("Load failed: {}", e);
            }
        }
    }

    fn pick_and_load(&mut self) {
        if let Some(dir) = rfd::FileDialog::new()
            .set_title("Select Map Folder")
            .pick_folder()
        {
            self.load_folder(&dir);
        }
    }

    fn save(&mut self) {
        match self.editor.save() {
            Ok(Some(path)) => self.status = format!("Saved {}", path.display()),
            Ok(None) => {}
            Err(e) => {
                log::error!("Failed to save map: {}", e);
                self.status = format!("Save failed: {}", e);
            }
        }
    }

    fn save_as(&mut self) {
        let Some(format) = self.editor.image_format() else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_title("Save Map As")
            .add_filter(format!("{:?} Files", format), format.extensions_str())
            .add_filter("All Files", &["*"])
            .save_file()
        else {
            return;
        };

        match self.editor.save_as(&path) {
            Ok(_) => self.status = format!("Saved copy to {}", path.display()),
            Err(e) => {
                log::error!("Failed to save map to {}: {}", path.display(), e);
                self.status = format!("Save failed: {}", e);
            }
        }
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Edit(command) => {
                if self.editor.apply(command) {
                    self.stale = true;
                }
            }
            Action::Load => self.pick_and_load(),
            Action::Save => self.save(),
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let actions: Vec<Action> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => action_for_key(*key, *modifiers),
                    _ => None,
                })
                .collect()
        });

        for action in actions {
            self.perform(action);
        }
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let title = match self.editor.session() {
            Some(session) => {
                let name = session
                    .folder()
                    .image_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let marker = if session.is_modified() { "*" } else { "" };
                format!("Map Editor - {}{}", name, marker)
            }
            None => "Map Editor".to_string(),
        };

        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }

    fn refresh_texture(&mut self, ctx: &egui::Context, bounds: ViewBounds) {
        if !self.stale && self.rendered_for == Some(bounds) {
            return;
        }

        let Some(frame) = self.editor.render(bounds) else {
            self.texture = None;
            self.rendered_for = None;
            return;
        };

        let size = [frame.image.width() as usize, frame.image.height() as usize];
        let image = ColorImage::from_rgba_unmultiplied(size, frame.image.as_raw());
        self.texture = Some(match self.texture.take() {
            Some(mut texture) => {
                texture.set(image, TextureOptions::NEAREST);
                texture
            }
            None => ctx.load_texture("map", image, TextureOptions::NEAREST),
        });

        self.rendered_for = Some(bounds);
        self.stale = false;
    }

    fn status_line(&self) -> String {
        let Some(session) = self.editor.session() else {
            return String::new();
        };

        let meta = session.metadata();
        let (width, height) = session.image().dimensions();
        let (ox, oy) = meta.origin_xy();
        let (wx, wy) = session.cursor_world();
        let history = session.history();
        let undo = match history.max_depth() {
            0 => history.len().to_string(),
            cap => format!("{}/{}", history.len(), cap),
        };
        format!(
            "{}x{} @ {} m/cell | origin ({:.3}, {:.3}, {:.3}) | cursor {} = ({:.3}, {:.3}) m \
             | value {} ({}) | undo {}",
            width,
            height,
            meta.resolution,
            ox,
            oy,
            meta.origin_yaw(),
            session.cursor(),
            wx,
            wy,
            session.cursor_value(),
            session.cursor_state().label(),
            undo,
        )
    }
}

impl eframe::App for MapEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("buttons").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let load = ui.button("Load Map");
                if load.clicked() {
                    load.surrender_focus();
                    self.pick_and_load();
                }

                let save = ui.add_enabled(self.editor.is_loaded(), egui::Button::new("Save Map"));
                if save.clicked() {
                    save.surrender_focus();
                    self.save();
                }

                let save_as =
                    ui.add_enabled(self.editor.is_loaded(), egui::Button::new("Save Map As"));
                if save_as.clicked() {
                    save_as.surrender_focus();
                    self.save_as();
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(RichText::new(self.status_line()).monospace());
            ui.label(RichText::new(&self.status).italics());
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let available = ui.available_size();
                let ppp = ctx.pixels_per_point();
                let bounds = ViewBounds::new(
                    (available.x * ppp).max(0.0) as u32,
                    (available.y * ppp).max(0.0) as u32,
                );
                self.refresh_texture(ctx, bounds);

                if let Some(texture) = &self.texture {
                    let size = texture.size_vec2() / ppp;
                    ui.centered_and_justified(|ui| {
                        ui.image(SizedTexture::new(texture.id(), size));
                    });
                }
            });

        self.update_title(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_move() {
        let none = Modifiers::NONE;
        assert_eq!(
            action_for_key(Key::ArrowLeft, none),
            Some(Action::Edit(Command::Move(Direction::Left)))
        );
        assert_eq!(
            action_for_key(Key::ArrowRight, none),
            Some(Action::Edit(Command::Move(Direction::Right)))
        );
        assert_eq!(
            action_for_key(Key::ArrowUp, none),
            Some(Action::Edit(Command::Move(Direction::Up)))
        );
        assert_eq!(
            action_for_key(Key::ArrowDown, none),
            Some(Action::Edit(Command::Move(Direction::Down)))
        );
    }

    #[test]
    fn test_space_toggles() {
        assert_eq!(
            action_for_key(Key::Space, Modifiers::NONE),
            Some(Action::Edit(Command::Toggle))
        );
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = Modifiers::COMMAND;
        assert_eq!(action_for_key(Key::Z, cmd), Some(Action::Edit(Command::Undo)));
        assert_eq!(action_for_key(Key::O, cmd), Some(Action::Load));
        assert_eq!(action_for_key(Key::S, cmd), Some(Action::Save));
        // Shift+Cmd+Z is redo elsewhere; there is no redo here
        assert_eq!(action_for_key(Key::Z, cmd | Modifiers::SHIFT), None);
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(action_for_key(Key::Z, Modifiers::NONE), None);
        assert_eq!(action_for_key(Key::Enter, Modifiers::NONE), None);
        assert_eq!(action_for_key(Key::ArrowLeft, Modifiers::COMMAND), None);
    }

    #[test]
    fn test_new_app_is_unloaded() {
        let app = MapEditorApp::new(MapEditor::default());
        assert!(app.texture.is_none());
        assert!(app.status_line().is_empty());
    }
}
