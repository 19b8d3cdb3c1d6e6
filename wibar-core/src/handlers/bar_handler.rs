use crate::config::Config;
use crate::errors::{Result, WibarError};
use crate::models::{Bar, BarId, BarOptions, Edge, Manager, ScreenId};
use crate::placement_servers::PlacementServer;

impl<C: Config, SERVER: PlacementServer> Manager<C, SERVER> {
    /// Creates a bar, registers it and docks it against its edge.
    ///
    /// # Errors
    ///
    /// Nothing is registered when the position is not one of `top`,
    /// `bottom`, `left` or `right`, or when the screen is unknown.
    pub fn create_bar(&mut self, options: BarOptions) -> Result<BarId> {
        let edge = match options.position.as_deref() {
            Some(position) => position.parse::<Edge>()?,
            None => Edge::default(),
        };
        let screen = match options.screen {
            Some(screen) => screen,
            None => self
                .placement_server
                .primary_screen()
                .ok_or(WibarError::NoScreen)?,
        };
        let area = self
            .placement_server
            .screen_geometry(screen)
            .ok_or(WibarError::UnknownScreen(screen))?;

        let font = options
            .font
            .or_else(|| self.config.font().map(str::to_owned));
        let thickness = self.default_thickness(font.as_deref());
        let width = options.width.map(|w| w.into_absolute(area.width));
        let height = options.height.map(|h| h.into_absolute(area.height));
        let (width, height, explicit_span) = if edge.is_horizontal() {
            (
                width.unwrap_or_else(|| span(area.width)),
                height.or_else(|| self.config.bar_height()).unwrap_or(thickness),
                options.width.is_some(),
            )
        } else {
            (
                width.or_else(|| self.config.bar_width()).unwrap_or(thickness),
                height.unwrap_or_else(|| span(area.height)),
                options.height.is_some(),
            )
        };

        let id = self.state.next_bar_id();
        let mut bar = Bar::new(id, screen);
        bar.width = width;
        bar.height = height;
        bar.stretch = options.stretch.unwrap_or(!explicit_span);
        bar.visible = options.visible.unwrap_or(true);
        bar.font = font;
        bar.properties = options.properties;
        self.state.bars.push(bar);
        self.state.registry.add(id);
        tracing::info!("Created {} on {} ({}x{})", id, screen, width, height);

        self.place_at(id, edge);
        Ok(id)
    }

    /// # Errors
    ///
    /// Fails with `UnknownBar` for ids this manager never issued.
    pub fn position(&self, id: BarId) -> Result<Edge> {
        Ok(self.checked(id)?.position())
    }

    /// Moves the bar to `edge`, on top of the bars already docked there.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownBar` for ids this manager never issued.
    pub fn set_position(&mut self, id: BarId, edge: Edge) -> Result<()> {
        self.checked(id)?;
        self.apply_position(id, edge);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails with `UnknownBar` for ids this manager never issued.
    pub fn stretch(&self, id: BarId) -> Result<bool> {
        Ok(self.checked(id)?.stretch())
    }

    /// # Errors
    ///
    /// Fails with `UnknownBar` for ids this manager never issued.
    pub fn set_stretch(&mut self, id: BarId, stretch: bool) -> Result<()> {
        self.checked(id)?;
        self.apply_stretch(id, stretch);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails with `UnknownBar` for ids this manager never issued.
    pub fn set_visible(&mut self, id: BarId, visible: bool) -> Result<()> {
        let bar = self.checked_mut(id)?;
        if bar.visible == visible {
            return Ok(());
        }
        bar.visible = visible;
        if bar.is_removed() {
            return Ok(());
        }
        let attached = bar.is_attached();
        self.reattach(id);
        if attached {
            self.attach(id);
        }
        Ok(())
    }

    /// Gives the bar new absolute dimensions.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownBar` for ids this manager never issued.
    pub fn resize(&mut self, id: BarId, width: u32, height: u32) -> Result<()> {
        let bar = self.checked_mut(id)?;
        bar.width = width;
        bar.height = height;
        if bar.is_removed() {
            return Ok(());
        }
        self.detach(id);
        self.reattach(id);
        self.attach(id);
        Ok(())
    }

    /// Moves the bar to another screen, stacking it behind the bars
    /// already docked there.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownBar` or `UnknownScreen`; nothing changes then.
    pub fn set_screen(&mut self, id: BarId, screen: ScreenId) -> Result<()> {
        let current = self.checked(id)?.screen();
        if self.placement_server.screen_geometry(screen).is_none() {
            return Err(WibarError::UnknownScreen(screen));
        }
        let Some(previous) = current else {
            tracing::debug!("Ignoring screen change of removed {}", id);
            return Ok(());
        };
        if previous == screen {
            return Ok(());
        }

        self.detach(id);
        self.state.registry.move_to_end(id);
        if let Some(bar) = self.state.bar_mut(id) {
            bar.screen = Some(screen);
        }
        self.reattach_screen(previous, Some(id));
        self.reattach(id);
        self.attach(id);
        Ok(())
    }

    /// Hides the bar, releases its placement and forgets it. Removing a bar
    /// twice is harmless.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownBar` for ids this manager never issued.
    pub fn remove_bar(&mut self, id: BarId) -> Result<()> {
        self.checked(id)?;
        if let Some(screen) = self.retire(id) {
            self.reattach_screen(screen, Some(id));
        }
        Ok(())
    }

    pub(crate) fn apply_position(&mut self, id: BarId, edge: Edge) {
        let Some(bar) = self.state.bar_mut(id) else {
            return;
        };
        if bar.is_removed() {
            bar.edge = Some(edge);
        } else {
            self.place_at(id, edge);
        }
    }

    pub(crate) fn apply_stretch(&mut self, id: BarId, stretch: bool) {
        let Some(bar) = self.state.bar_mut(id) else {
            return;
        };
        bar.stretch = stretch;
        if !bar.is_removed() {
            self.attach(id);
        }
    }

    /// Takes the bar out of the layout. Returns the screen it was on, or
    /// `None` when it was already removed.
    pub(crate) fn retire(&mut self, id: BarId) -> Option<ScreenId> {
        let bar = self.state.bar_mut(id)?;
        let screen = bar.screen?;
        bar.visible = false;
        self.detach(id);
        self.state.registry.remove(id);
        if let Some(bar) = self.state.bar_mut(id) {
            bar.screen = None;
        }
        tracing::info!("Removed {} from {}", id, screen);
        Some(screen)
    }

    /// Docks a live bar at `edge`: it leaves its old slot, its siblings make
    /// room, and it is attached last.
    fn place_at(&mut self, id: BarId, edge: Edge) {
        self.detach(id);
        let Some(previous) = self.state.bar(id).map(|b| b.edge) else {
            return;
        };
        if previous.is_some() {
            self.state.registry.move_to_end(id);
        }
        let resized = match (previous, self.state.bar(id)) {
            (Some(previous), Some(bar)) if previous.changes_class(edge) => {
                Some(self.default_dimensions(bar, edge))
            }
            _ => None,
        };

        if let Some(bar) = self.state.bar_mut(id) {
            if let Some((width, height)) = resized {
                bar.width = width;
                bar.height = height;
            }
            bar.edge = Some(edge);
        }
        tracing::debug!("Docking {} at {}", id, edge);
        self.reattach(id);
        self.attach(id);
    }

    /// Dimensions a bar takes when it switches to the other class of edge:
    /// font-sized across the edge and the screen's span along it.
    fn default_dimensions(&self, bar: &Bar, edge: Edge) -> (u32, u32) {
        let thickness = self.default_thickness(bar.font.as_deref());
        let area = bar
            .screen()
            .and_then(|s| self.placement_server.screen_geometry(s))
            .unwrap_or_default();
        if edge.is_horizontal() {
            (span(area.width), thickness)
        } else {
            (thickness, span(area.height))
        }
    }

    fn default_thickness(&self, font: Option<&str>) -> u32 {
        let font_height = self.placement_server.font_height(font);
        (font_height * 3).div_ceil(2)
    }

    fn checked(&self, id: BarId) -> Result<&Bar> {
        self.state.bar(id).ok_or(WibarError::UnknownBar(id))
    }

    fn checked_mut(&mut self, id: BarId) -> Result<&mut Bar> {
        self.state.bar_mut(id).ok_or(WibarError::UnknownBar(id))
    }
}

fn span(length: i32) -> u32 {
    u32::try_from(length).unwrap_or(0)
}
