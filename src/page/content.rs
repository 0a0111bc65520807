//! Static copy for the landing page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClass {
    About,
    Solution,
    Step,
    Doc,
    Blog,
}

impl CardClass {
    pub fn key_prefix(self) -> &'static str {
        match self {
            CardClass::About => "about-card",
            CardClass::Solution => "solution-card",
            CardClass::Step => "step",
            CardClass::Doc => "doc-card",
            CardClass::Blog => "blog-card",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum SectionKind {
    Hero,
    Cards {
        class: CardClass,
        cards: &'static [Card],
    },
    Contact,
}

#[derive(Debug, Clone, Copy)]
pub struct SectionContent {
    pub id: &'static str,
    pub nav_label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub kind: SectionKind,
}

impl SectionContent {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const BRAND: &str = "ChipIQ";

const ABOUT_CARDS: &[Card] = &[
    Card {
        title: "Silicon-first",
        body: "We design inference accelerators around the workloads that matter, starting from the memory hierarchy rather than the marketing slide.",
    },
    Card {
        title: "Measured, not promised",
        body: "Every performance figure we publish comes with the benchmark harness, the board revision and the firmware build that produced it.",
    },
    Card {
        title: "Open toolchain",
        body: "Our compiler and runtime are developed in the open so teams can inspect, extend and ship without waiting on a vendor roadmap.",
    },
    Card {
        title: "Built for the edge",
        body: "Power envelopes from two to fifteen watts let the same model run in a drone, a camera or a rack without a rewrite.",
    },
];

const SOLUTION_CARDS: &[Card] = &[
    Card {
        title: "IQ-Edge modules",
        body: "Drop-in M.2 and mini-PCIe modules with on-die SRAM sized for vision transformers and streaming audio models.",
    },
    Card {
        title: "IQ-Rack servers",
        body: "Dense 1U appliances that pool accelerators behind a single scheduler, exposing a gRPC endpoint per model.",
    },
    Card {
        title: "IQ-Studio",
        body: "Profiling, quantization and deployment in one workspace, with per-layer latency traces captured on real hardware.",
    },
];

const PROCESS_STEPS: &[Card] = &[
    Card {
        title: "1. Profile",
        body: "Upload a model and a representative dataset; we capture the operator mix and memory traffic.",
    },
    Card {
        title: "2. Compile",
        body: "The compiler tiles, fuses and quantizes the graph for the target module and reports expected latency.",
    },
    Card {
        title: "3. Validate",
        body: "Accuracy and latency are checked on physical boards in our lab before anything ships.",
    },
    Card {
        title: "4. Deploy",
        body: "Signed artifacts roll out through your existing fleet tooling with staged rollback built in.",
    },
];

const DOC_CARDS: &[Card] = &[
    Card {
        title: "Getting started",
        body: "Install the runtime, flash a module and run your first model in under ten minutes.",
    },
    Card {
        title: "Compiler reference",
        body: "Every pass, flag and environment variable the compiler understands, with worked examples.",
    },
    Card {
        title: "Hardware guide",
        body: "Mechanical drawings, thermal limits and pinouts for every module and carrier board.",
    },
];

const BLOG_CARDS: &[Card] = &[
    Card {
        title: "Why SRAM beats HBM at the edge",
        body: "A look at the bandwidth-per-watt numbers that shaped our second-generation die.",
    },
    Card {
        title: "Quantizing attention without tears",
        body: "Per-head scaling recovered most of the accuracy we lost going from FP16 to INT8.",
    },
    Card {
        title: "Shipping firmware to ten thousand cameras",
        body: "Lessons from our first large fleet rollout, including the one that needed a rollback.",
    },
];

pub static SECTIONS: [SectionContent; 7] = [
    SectionContent {
        id: "home",
        nav_label: "Home",
        title: "Inference silicon for the real world",
        subtitle: "Accelerators, toolchain and support to take models from notebook to device.",
        kind: SectionKind::Hero,
    },
    SectionContent {
        id: "about",
        nav_label: "About",
        title: "About ChipIQ",
        subtitle: "A hardware team that ships software.",
        kind: SectionKind::Cards {
            class: CardClass::About,
            cards: ABOUT_CARDS,
        },
    },
    SectionContent {
        id: "solutions",
        nav_label: "Solutions",
        title: "Solutions",
        subtitle: "One architecture from the sensor to the data center.",
        kind: SectionKind::Cards {
            class: CardClass::Solution,
            cards: SOLUTION_CARDS,
        },
    },
    SectionContent {
        id: "process",
        nav_label: "How it works",
        title: "How it works",
        subtitle: "Four steps from trained model to fleet deployment.",
        kind: SectionKind::Cards {
            class: CardClass::Step,
            cards: PROCESS_STEPS,
        },
    },
    SectionContent {
        id: "docs",
        nav_label: "Docs",
        title: "Documentation",
        subtitle: "Everything you need to build on ChipIQ.",
        kind: SectionKind::Cards {
            class: CardClass::Doc,
            cards: DOC_CARDS,
        },
    },
    SectionContent {
        id: "blog",
        nav_label: "Blog",
        title: "From the blog",
        subtitle: "Engineering notes from the team.",
        kind: SectionKind::Cards {
            class: CardClass::Blog,
            cards: BLOG_CARDS,
        },
    },
    SectionContent {
        id: "contact",
        nav_label: "Contact",
        title: "Get in touch",
        subtitle: "Tell us about your workload and we will get back to you.",
        kind: SectionKind::Contact,
    },
];
