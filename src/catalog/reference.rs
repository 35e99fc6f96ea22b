//! Fixed reference vocabularies
//!
//! Neurotransmitters, brain regions, cognitive functions and pathways are a
//! closed set: the graph links supplements and mechanisms *to* them, but they
//! are never loaded from a catalog file. Each enum's `id()` is the node id used
//! in the assembled graph.

use serde::{Deserialize, Serialize};

/// Display data shared by every reference vocabulary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub polish_name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Neurotransmitter {
    Dopamine,
    Serotonin,
    Norepinephrine,
    Acetylcholine,
    Gaba,
    Glutamate,
}

impl Neurotransmitter {
    pub const ALL: [Neurotransmitter; 6] = [
        Neurotransmitter::Dopamine,
        Neurotransmitter::Serotonin,
        Neurotransmitter::Norepinephrine,
        Neurotransmitter::Acetylcholine,
        Neurotransmitter::Gaba,
        Neurotransmitter::Glutamate,
    ];

    pub fn id(&self) -> &'static str {
        self.entry().id
    }

    pub fn entry(&self) -> ReferenceEntry {
        match self {
            Neurotransmitter::Dopamine => ReferenceEntry {
                id: "dopamine",
                name: "Dopamine",
                polish_name: "Dopamina",
                description: "Neurotransmiter związany z motywacją i nagrodą",
            },
            Neurotransmitter::Serotonin => ReferenceEntry {
                id: "serotonin",
                name: "Serotonin",
                polish_name: "Serotonina",
                description: "Neurotransmiter regulujący nastrój i sen",
            },
            Neurotransmitter::Norepinephrine => ReferenceEntry {
                id: "norepinephrine",
                name: "Norepinephrine",
                polish_name: "Noradrenalina",
                description: "Neurotransmiter związany z uwagą i czujnością",
            },
            Neurotransmitter::Acetylcholine => ReferenceEntry {
                id: "acetylcholine",
                name: "Acetylcholine",
                polish_name: "Acetylocholina",
                description: "Neurotransmiter ważny dla pamięci i uczenia się",
            },
            Neurotransmitter::Gaba => ReferenceEntry {
                id: "gaba",
                name: "GABA",
                polish_name: "GABA",
                description: "Główny hamujący neurotransmiter w mózgu",
            },
            Neurotransmitter::Glutamate => ReferenceEntry {
                id: "glutamate",
                name: "Glutamate",
                polish_name: "Glutaminian",
                description: "Główny pobudzający neurotransmiter w mózgu",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrainRegion {
    PrefrontalCortex,
    Hippocampus,
    Amygdala,
    Striatum,
    Cerebellum,
}

impl BrainRegion {
    pub const ALL: [BrainRegion; 5] = [
        BrainRegion::PrefrontalCortex,
        BrainRegion::Hippocampus,
        BrainRegion::Amygdala,
        BrainRegion::Striatum,
        BrainRegion::Cerebellum,
    ];

    pub fn id(&self) -> &'static str {
        self.entry().id
    }

    pub fn entry(&self) -> ReferenceEntry {
        match self {
            BrainRegion::PrefrontalCortex => ReferenceEntry {
                id: "prefrontal-cortex",
                name: "Prefrontal Cortex",
                polish_name: "Kora przedczołowa",
                description: "Odpowiedzialna za funkcje wykonawcze",
            },
            BrainRegion::Hippocampus => ReferenceEntry {
                id: "hippocampus",
                name: "Hippocampus",
                polish_name: "Hipokamp",
                description: "Kluczowy dla pamięci i uczenia się",
            },
            BrainRegion::Amygdala => ReferenceEntry {
                id: "amygdala",
                name: "Amygdala",
                polish_name: "Ciało migdałowate",
                description: "Centrum przetwarzania emocji",
            },
            BrainRegion::Striatum => ReferenceEntry {
                id: "striatum",
                name: "Striatum",
                polish_name: "Prążkowie",
                description: "Część systemu nagrody i motywacji",
            },
            BrainRegion::Cerebellum => ReferenceEntry {
                id: "cerebellum",
                name: "Cerebellum",
                polish_name: "Móżdżek",
                description: "Koordynacja ruchowa i równowaga",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CognitiveFunction {
    Memory,
    Attention,
    ExecutiveFunction,
    Mood,
    StressResponse,
}

impl CognitiveFunction {
    pub const ALL: [CognitiveFunction; 5] = [
        CognitiveFunction::Memory,
        CognitiveFunction::Attention,
        CognitiveFunction::ExecutiveFunction,
        CognitiveFunction::Mood,
        CognitiveFunction::StressResponse,
    ];

    pub fn id(&self) -> &'static str {
        self.entry().id
    }

    pub fn entry(&self) -> ReferenceEntry {
        match self {
            CognitiveFunction::Memory => ReferenceEntry {
                id: "memory",
                name: "Memory",
                polish_name: "Pamięć",
                description: "Zdolność do przechowywania i odzyskiwania informacji",
            },
            CognitiveFunction::Attention => ReferenceEntry {
                id: "attention",
                name: "Attention",
                polish_name: "Uwaga",
                description: "Zdolność do skupienia się na określonych bodźcach",
            },
            CognitiveFunction::ExecutiveFunction => ReferenceEntry {
                id: "executive-function",
                name: "Executive Function",
                polish_name: "Funkcje wykonawcze",
                description: "Planowanie, kontrola i elastyczność poznawcza",
            },
            CognitiveFunction::Mood => ReferenceEntry {
                id: "mood",
                name: "Mood",
                polish_name: "Nastrój",
                description: "Stan emocjonalny i samopoczucie",
            },
            CognitiveFunction::StressResponse => ReferenceEntry {
                id: "stress-response",
                name: "Stress Response",
                polish_name: "Odpowiedź na stres",
                description: "Reakcja organizmu na czynniki stresowe",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pathway {
    Dopaminergic,
    Serotonergic,
    Cholinergic,
    Gabaergic,
}

impl Pathway {
    pub const ALL: [Pathway; 4] = [
        Pathway::Dopaminergic,
        Pathway::Serotonergic,
        Pathway::Cholinergic,
        Pathway::Gabaergic,
    ];

    pub fn id(&self) -> &'static str {
        self.entry().id
    }

    pub fn entry(&self) -> ReferenceEntry {
        match self {
            Pathway::Dopaminergic => ReferenceEntry {
                id: "dopaminergic-pathway",
                name: "Dopaminergic Pathway",
                polish_name: "Szlak dopaminergiczny",
                description: "Ścieżka sygnalizacji dopaminy",
            },
            Pathway::Serotonergic => ReferenceEntry {
                id: "serotonergic-pathway",
                name: "Serotonergic Pathway",
                polish_name: "Szlak serotoninergiczny",
                description: "Ścieżka sygnalizacji serotoniny",
            },
            Pathway::Cholinergic => ReferenceEntry {
                id: "cholinergic-pathway",
                name: "Cholinergic Pathway",
                polish_name: "Szlak cholinergiczny",
                description: "Ścieżka sygnalizacji acetylocholiny",
            },
            Pathway::Gabaergic => ReferenceEntry {
                id: "gabaergic-pathway",
                name: "GABAergic Pathway",
                polish_name: "Szlak GABAergiczny",
                description: "Ścieżka hamująca GABA",
            },
        }
    }
}
