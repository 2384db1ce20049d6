use crate::prompts::enums::target_service::TargetService;

use super::rule::{flag, keyword, switch, Condition, Render, Rule, Section};

const ASPECT: &[&str] = &["aspect", "aspectRatio"];
const NEGATIVE: &[&str] = &["negative", "negativePrompt"];
const CAMERA_MOVE: Condition = Condition::NotKeyword("None");

const fn visual(rules: &'static [Rule]) -> Section {
    Section {
        lead: "",
        joiner: ", ",
        open: "",
        close: "",
        rules,
    }
}

const fn flags(rules: &'static [Rule]) -> Section {
    Section {
        lead: " ",
        joiner: " ",
        open: "",
        close: "",
        rules,
    }
}

const fn text(keys: &'static [&'static str], when: Condition, prefix: &'static str) -> Rule {
    Rule {
        keys,
        when,
        render: Render::Text { prefix, suffix: "" },
    }
}

const fn lowercase(keys: &'static [&'static str], prefix: &'static str) -> Rule {
    Rule {
        keys,
        when: CAMERA_MOVE,
        render: Render::Lowercase { prefix },
    }
}

// Veo

const VEO_VISUAL: &[Rule] = &[
    keyword(&["character"]),
    keyword(&["scene"]),
    keyword(&["shot"]),
    keyword(&["motion", "motions"]),
    keyword(&["lighting"]),
    keyword(&["style"]),
];

const VEO_AUDIO: &[Rule] = &[
    flag(&["audioDesc"], "Audio: "),
    Rule {
        keys: &["dialogue", "dialogueText"],
        when: Condition::Present,
        render: Render::Text {
            prefix: "Dialogue: \"",
            suffix: "\"",
        },
    },
];

const VEO_FLAGS: &[Rule] = &[
    flag(NEGATIVE, "--no "),
    flag(ASPECT, "--ar "),
    Rule {
        keys: &["duration"],
        when: Condition::Present,
        render: Render::Seconds {
            prefix: "--duration ",
        },
    },
    flag(&["seed"], "--seed "),
];

static VEO: [Section; 3] = [
    visual(VEO_VISUAL),
    Section {
        lead: ". ",
        joiner: ". ",
        open: "",
        close: "",
        rules: VEO_AUDIO,
    },
    flags(VEO_FLAGS),
];

// Runway

const RUNWAY_VISUAL: &[Rule] = &[
    text(&["shotStyle"], CAMERA_MOVE, ""),
    keyword(&["prompt"]),
];

const RUNWAY_CAMERA: &[Rule] = &[
    lowercase(&["pan"], "pan "),
    lowercase(&["tilt"], "tilt "),
    lowercase(&["roll"], "roll "),
    lowercase(&["zoom"], "zoom "),
];

const RUNWAY_FLAGS: &[Rule] = &[
    Rule {
        keys: &["style"],
        when: Condition::Present,
        render: Render::Lowercase { prefix: "--style " },
    },
    Rule {
        keys: &["motionAmount", "strength"],
        when: Condition::Present,
        render: Render::Scaled {
            prefix: "--motion ",
            divisor: 10.0,
        },
    },
    flag(ASPECT, "--ar "),
    flag(&["seed"], "--seed "),
    switch(&["upscale"], "--upscale"),
];

static RUNWAY: [Section; 3] = [
    visual(RUNWAY_VISUAL),
    Section {
        lead: " ",
        joiner: " ",
        open: "@camera{",
        close: "}",
        rules: RUNWAY_CAMERA,
    },
    flags(RUNWAY_FLAGS),
];

// Kling

const KLING_VISUAL: &[Rule] = &[
    keyword(&["character"]),
    keyword(&["scene"]),
    keyword(&["style"]),
    keyword(&["angle"]),
    keyword(&["shot"]),
    keyword(&["motion"]),
];

const KLING_FLAGS: &[Rule] = &[
    flag(&["aspectRatio", "aspect"], "--ar "),
    flag(&["realism"], "--realism "),
];

static KLING: [Section; 2] = [visual(KLING_VISUAL), flags(KLING_FLAGS)];

// Luma

const LUMA_VISUAL: &[Rule] = &[
    keyword(&["prompt"]),
    keyword(&["character"]),
    keyword(&["scene"]),
    keyword(&["lighting"]),
    keyword(&["cameraShot", "camera"]),
    keyword(&["cameraMotion"]),
    keyword(&["style"]),
];

const LUMA_FLAGS: &[Rule] = &[
    flag(NEGATIVE, "--no "),
    flag(&["seed"], "--seed "),
    flag(ASPECT, "--ar "),
    flag(&["guidance"], "--gs "),
];

static LUMA: [Section; 2] = [visual(LUMA_VISUAL), flags(LUMA_FLAGS)];

// Pixverse

const PIXVERSE_VISUAL: &[Rule] = &[
    keyword(&["prompt", "subject"]),
    keyword(&["scene"]),
    keyword(&["shot"]),
    keyword(&["lighting"]),
    keyword(&["style"]),
];

const PIXVERSE_FLAGS: &[Rule] = &[
    flag(NEGATIVE, "--no "),
    flag(&["seed"], "--seed "),
    flag(&["characterRef"], "--cref "),
];

static PIXVERSE: [Section; 2] = [visual(PIXVERSE_VISUAL), flags(PIXVERSE_FLAGS)];

// Midjourney

const MIDJOURNEY_VISUAL: &[Rule] = &[
    keyword(&["prompt"]),
    keyword(&["shot"]),
    keyword(&["angle"]),
    keyword(&["lighting"]),
];

const MIDJOURNEY_FLAGS: &[Rule] = &[
    flag(NEGATIVE, "--no "),
    flag(ASPECT, "--ar "),
    Rule {
        keys: &["version"],
        when: Condition::NotKeyword("latest"),
        render: Render::Version { prefix: "--v " },
    },
    text(&["chaos"], Condition::Above(0.0), "--c "),
    text(&["stylize"], Condition::NotDefault(100.0), "--s "),
    flag(&["seed"], "--seed "),
    text(&["stop"], Condition::NotDefault(100.0), "--stop "),
    switch(&["video"], "--video"),
];

static MIDJOURNEY: [Section; 2] = [visual(MIDJOURNEY_VISUAL), flags(MIDJOURNEY_FLAGS)];

pub fn layout(service: TargetService) -> &'static [Section] {
    match service {
        TargetService::Veo => &VEO,
        TargetService::Runway => &RUNWAY,
        TargetService::Kling => &KLING,
        TargetService::Luma => &LUMA,
        TargetService::Pixverse => &PIXVERSE,
        TargetService::Midjourney => &MIDJOURNEY,
    }
}
