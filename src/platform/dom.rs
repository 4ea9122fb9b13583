//! DOM-backed controls and HUD

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::game::Controls;
use crate::hud::{Hud, LockStatus, Readouts, format_frequency};
use crate::sim::{SliderValues, WaveParams};

/// Element ids the game binds to
pub mod ids {
    pub const CANVAS: &str = "waveCanvas";
    pub const FREQ_SLIDER: &str = "freqSlider";
    pub const AMP_SLIDER: &str = "ampSlider";
    pub const FREQ_VALUE: &str = "freqValue";
    pub const AMP_VALUE: &str = "ampValue";
    pub const MATCH_PERCENT: &str = "matchPercent";
    pub const LOCK_STATUS: &str = "lockStatus";
    pub const TARGET_FREQ_HINT: &str = "targetFreqHint";
    pub const TARGET_AMP_HINT: &str = "targetAmpHint";
    pub const GAME_PANEL: &str = "secretGameUI";
    pub const SECRET_PANEL: &str = "secretRevealedUI";
    pub const RESET_BUTTON: &str = "lockBtn";
}

fn input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

/// The two range inputs
pub struct SliderControls {
    frequency: HtmlInputElement,
    amplitude: HtmlInputElement,
}

impl SliderControls {
    /// `None` if either slider is missing
    pub fn find(document: &Document) -> Option<Self> {
        Some(Self {
            frequency: input(document, ids::FREQ_SLIDER)?,
            amplitude: input(document, ids::AMP_SLIDER)?,
        })
    }
}

impl Controls for SliderControls {
    fn read(&self) -> SliderValues {
        SliderValues {
            frequency: self.frequency.value_as_number(),
            amplitude: self.amplitude.value_as_number(),
        }
    }
}

/// Readouts, hints, badge and the two panels. Every element is optional.
pub struct DomHud {
    freq_value: Option<Element>,
    amp_value: Option<Element>,
    match_percent: Option<Element>,
    lock_status: Option<Element>,
    target_freq_hint: Option<Element>,
    target_amp_hint: Option<Element>,
    game_panel: Option<Element>,
    secret_panel: Option<Element>,
}

impl DomHud {
    pub fn find(document: &Document) -> Self {
        let get = |id| document.get_element_by_id(id);
        Self {
            freq_value: get(ids::FREQ_VALUE),
            amp_value: get(ids::AMP_VALUE),
            match_percent: get(ids::MATCH_PERCENT),
            lock_status: get(ids::LOCK_STATUS),
            target_freq_hint: get(ids::TARGET_FREQ_HINT),
            target_amp_hint: get(ids::TARGET_AMP_HINT),
            game_panel: get(ids::GAME_PANEL),
            secret_panel: get(ids::SECRET_PANEL),
        }
    }
}

fn set_text(el: &Option<Element>, text: &str) {
    if let Some(el) = el {
        el.set_text_content(Some(text));
    }
}

fn set_hidden(el: &Option<Element>, hidden: bool) {
    if let Some(el) = el {
        let classes = el.class_list();
        let _ = if hidden {
            classes.add_1("hidden")
        } else {
            classes.remove_1("hidden")
        };
    }
}

impl Hud for DomHud {
    fn show_readouts(&mut self, readouts: &Readouts) {
        set_text(&self.freq_value, &readouts.frequency);
        set_text(&self.amp_value, &readouts.amplitude);
        set_text(&self.match_percent, &readouts.match_percent);
    }

    fn show_target_hint(&mut self, target: &WaveParams) {
        set_text(&self.target_freq_hint, &format_frequency(target.frequency));
        set_text(&self.target_amp_hint, &target.amplitude.to_string());
    }

    fn set_lock_status(&mut self, status: LockStatus) {
        let unlocked = status == LockStatus::Unlocked;
        set_hidden(&self.game_panel, unlocked);
        set_hidden(&self.secret_panel, !unlocked);

        if let Some(badge) = &self.lock_status {
            let classes = badge.class_list();
            let other = match status {
                LockStatus::Locked => LockStatus::Unlocked,
                LockStatus::Unlocked => LockStatus::Locked,
            };
            let _ = classes.remove_1(other.css_class());
            let _ = classes.add_1(status.css_class());
            badge.set_inner_html(&status.badge_html());
        }
    }
}
