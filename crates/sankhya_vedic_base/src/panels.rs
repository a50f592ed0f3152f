//! Display panels derived from the core numbers and the current Mahadasha.

use crate::graha::Graha;
use crate::numbers::{Ank, CoreNumbers, lucky_number};
use crate::tables::{
    LuckyColor, basic_description, destiny_description, destiny_features, lucky_color,
    lucky_direction, recommendation,
};

/// Everything shown around the grid and the dasha cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panels {
    pub basic_description: &'static str,
    pub destiny_description: &'static str,
    pub lucky_number: Ank,
    pub lucky_number_text: String,
    pub lucky_color: LuckyColor,
    pub lucky_color_text: String,
    /// Graha of the Destiny Number.
    pub ruling_planet: Graha,
    pub ruling_planet_text: String,
    pub lucky_direction: &'static str,
    pub lucky_direction_text: String,
    pub life_path: String,
    pub recommendation: &'static str,
    pub features: &'static [&'static str],
}

/// Compare the Basic and Destiny numbers in one sentence.
pub fn life_path_text(core: &CoreNumbers) -> String {
    let CoreNumbers { basic, destiny } = core;
    if core.aligned() {
        format!(
            "Your destiny number {destiny} aligns closely with your basic number {basic}, \
             indicating harmony between your core nature and life direction."
        )
    } else {
        format!(
            "Your destiny number {destiny} contrasts with your basic number {basic}, \
             suggesting growth through balancing core tendencies with life lessons."
        )
    }
}

/// Build every panel. `mahadasha` is the graha of the current Mahadasha.
pub fn derive_panels(core: &CoreNumbers, mahadasha: Graha) -> Panels {
    let destiny = core.destiny;
    let lucky = lucky_number(destiny);
    let color = lucky_color(destiny);
    let ruling = Graha::from_ank(destiny);
    let direction = lucky_direction(destiny);

    Panels {
        basic_description: basic_description(core.basic),
        destiny_description: destiny_description(destiny),
        lucky_number: lucky,
        lucky_number_text: format!(
            "Your personal lucky number {lucky} brings harmony and positive vibrations."
        ),
        lucky_color: color,
        lucky_color_text: format!(
            "{} enhances your numerological vibrations and brings prosperity.",
            color.name
        ),
        ruling_planet: ruling,
        ruling_planet_text: format!(
            "{ruling} is the ruling planet for destiny number {destiny}, \
             influencing your core characteristics and life path."
        ),
        lucky_direction: direction,
        lucky_direction_text: format!(
            "Face {direction} direction for success and positive energy flow."
        ),
        life_path: life_path_text(core),
        recommendation: recommendation(mahadasha.ank()),
        features: destiny_features(destiny),
    }
}
