//! GHS Rev. 11 reference tables.
//!
//! Statement texts are verbatim. Tables are plain `const` slices; the
//! [`Registry`](crate::Registry) indexes them once at first use.

use crate::pictogram::Pictogram;

/// `(code, canonical text, hazard class, category)`.
pub(crate) const HAZARD_STATEMENTS: &[(&str, &str, &str, &str)] = &[
    // ── Physical hazards ────────────────────────────────────────────────
    ("H200", "Unstable explosive", "Explosives", "Unstable explosive"),
    ("H201", "Explosive; mass explosion hazard", "Explosives", "Division 1.1"),
    ("H202", "Explosive; severe projection hazard", "Explosives", "Division 1.2"),
    ("H203", "Explosive; fire, blast or projection hazard", "Explosives", "Division 1.3"),
    ("H204", "Fire or projection hazard", "Explosives", "Division 1.4"),
    ("H205", "May mass explode in fire", "Explosives", "Division 1.5"),
    ("H220", "Extremely flammable gas", "Flammable gases", "1"),
    ("H221", "Flammable gas", "Flammable gases", "2"),
    ("H222", "Extremely flammable aerosol", "Aerosols", "1"),
    ("H223", "Flammable aerosol", "Aerosols", "2"),
    ("H224", "Extremely flammable liquid and vapor", "Flammable liquids", "1"),
    ("H225", "Highly flammable liquid and vapor", "Flammable liquids", "2"),
    ("H226", "Flammable liquid and vapor", "Flammable liquids", "3"),
    ("H227", "Combustible liquid", "Flammable liquids", "4"),
    ("H228", "Flammable solid", "Flammable solids", "1, 2"),
    ("H229", "Pressurized container: may burst if heated", "Aerosols", "1, 2, 3"),
    ("H230", "May react explosively even in the absence of air", "Flammable gases (chemically unstable)", "A"),
    ("H231", "May react explosively even in the absence of air at elevated pressure and/or temperature", "Flammable gases (chemically unstable)", "B"),
    ("H240", "Heating may cause an explosion", "Self-reactive substances; organic peroxides", "Type A"),
    ("H241", "Heating may cause a fire or explosion", "Self-reactive substances; organic peroxides", "Type B"),
    ("H242", "Heating may cause a fire", "Self-reactive substances; organic peroxides", "Types C-F"),
    ("H250", "Catches fire spontaneously if exposed to air", "Pyrophoric liquids; pyrophoric solids", "1"),
    ("H251", "Self-heating; may catch fire", "Self-heating substances", "1"),
    ("H252", "Self-heating in large quantities; may catch fire", "Self-heating substances", "2"),
    ("H260", "In contact with water releases flammable gases which may ignite spontaneously", "Substances which in contact with water emit flammable gases", "1"),
    ("H261", "In contact with water releases flammable gas", "Substances which in contact with water emit flammable gases", "2, 3"),
    ("H270", "May cause or intensify fire; oxidizer", "Oxidizing gases", "1"),
    ("H271", "May cause fire or explosion; strong oxidizer", "Oxidizing liquids; oxidizing solids", "1"),
    ("H272", "May intensify fire; oxidizer", "Oxidizing liquids; oxidizing solids", "2, 3"),
    ("H280", "Contains gas under pressure; may explode if heated", "Gases under pressure", "Compressed, liquefied or dissolved gas"),
    ("H281", "Contains refrigerated gas; may cause cryogenic burns or injury", "Gases under pressure", "Refrigerated liquefied gas"),
    ("H290", "May be corrosive to metals", "Corrosive to metals", "1"),
    // ── Health hazards ──────────────────────────────────────────────────
    ("H300", "Fatal if swallowed", "Acute toxicity, oral", "1, 2"),
    ("H301", "Toxic if swallowed", "Acute toxicity, oral", "3"),
    ("H302", "Harmful if swallowed", "Acute toxicity, oral", "4"),
    ("H303", "May be harmful if swallowed", "Acute toxicity, oral", "5"),
    ("H304", "May be fatal if swallowed and enters airways", "Aspiration hazard", "1"),
    ("H305", "May be harmful if swallowed and enters airways", "Aspiration hazard", "2"),
    ("H310", "Fatal in contact with skin", "Acute toxicity, dermal", "1, 2"),
    ("H311", "Toxic in contact with skin", "Acute toxicity, dermal", "3"),
    ("H312", "Harmful in contact with skin", "Acute toxicity, dermal", "4"),
    ("H313", "May be harmful in contact with skin", "Acute toxicity, dermal", "5"),
    ("H314", "Causes severe skin burns and eye damage", "Skin corrosion/irritation", "1A, 1B, 1C"),
    ("H315", "Causes skin irritation", "Skin corrosion/irritation", "2"),
    ("H316", "Causes mild skin irritation", "Skin corrosion/irritation", "3"),
    ("H317", "May cause an allergic skin reaction", "Skin sensitization", "1, 1A, 1B"),
    ("H318", "Causes serious eye damage", "Serious eye damage/eye irritation", "1"),
    ("H319", "Causes serious eye irritation", "Serious eye damage/eye irritation", "2A"),
    ("H320", "Causes eye irritation", "Serious eye damage/eye irritation", "2B"),
    ("H330", "Fatal if inhaled", "Acute toxicity, inhalation", "1, 2"),
    ("H331", "Toxic if inhaled", "Acute toxicity, inhalation", "3"),
    ("H332", "Harmful if inhaled", "Acute toxicity, inhalation", "4"),
    ("H333", "May be harmful if inhaled", "Acute toxicity, inhalation", "5"),
    ("H334", "May cause allergy or asthma symptoms or breathing difficulties if inhaled", "Respiratory sensitization", "1, 1A, 1B"),
    ("H335", "May cause respiratory irritation", "Specific target organ toxicity, single exposure", "3 (respiratory tract irritation)"),
    ("H336", "May cause drowsiness or dizziness", "Specific target organ toxicity, single exposure", "3 (narcotic effects)"),
    ("H340", "May cause genetic defects", "Germ cell mutagenicity", "1A, 1B"),
    ("H341", "Suspected of causing genetic defects", "Germ cell mutagenicity", "2"),
    ("H350", "May cause cancer", "Carcinogenicity", "1A, 1B"),
    ("H351", "Suspected of causing cancer", "Carcinogenicity", "2"),
    ("H360", "May damage fertility or the unborn child", "Reproductive toxicity", "1A, 1B"),
    ("H361", "Suspected of damaging fertility or the unborn child", "Reproductive toxicity", "2"),
    ("H362", "May cause harm to breast-fed children", "Reproductive toxicity", "Effects on or via lactation"),
    ("H370", "Causes damage to organs", "Specific target organ toxicity, single exposure", "1"),
    ("H371", "May cause damage to organs", "Specific target organ toxicity, single exposure", "2"),
    ("H372", "Causes damage to organs through prolonged or repeated exposure", "Specific target organ toxicity, repeated exposure", "1"),
    ("H373", "May cause damage to organs through prolonged or repeated exposure", "Specific target organ toxicity, repeated exposure", "2"),
    // ── Environmental hazards ───────────────────────────────────────────
    ("H400", "Very toxic to aquatic life", "Hazardous to the aquatic environment, acute", "1"),
    ("H401", "Toxic to aquatic life", "Hazardous to the aquatic environment, acute", "2"),
    ("H402", "Harmful to aquatic life", "Hazardous to the aquatic environment, acute", "3"),
    ("H410", "Very toxic to aquatic life with long lasting effects", "Hazardous to the aquatic environment, long-term", "1"),
    ("H411", "Toxic to aquatic life with long lasting effects", "Hazardous to the aquatic environment, long-term", "2"),
    ("H412", "Harmful to aquatic life with long lasting effects", "Hazardous to the aquatic environment, long-term", "3"),
    ("H413", "May cause long lasting harmful effects to aquatic life", "Hazardous to the aquatic environment, long-term", "4"),
    ("H420", "Harms public health and the environment by destroying ozone in the upper atmosphere", "Hazardous to the ozone layer", "1"),
];

/// `(code, canonical text)`. Combined statements are registered under their
/// full `+`-joined code.
pub(crate) const PRECAUTIONARY_STATEMENTS: &[(&str, &str)] = &[
    ("P201", "Obtain special instructions before use."),
    ("P202", "Do not handle until all safety precautions have been read and understood."),
    ("P210", "Keep away from heat, hot surfaces, sparks, open flames and other ignition sources. No smoking."),
    ("P211", "Do not spray on an open flame or other ignition source."),
    ("P220", "Keep away from clothing and other combustible materials."),
    ("P221", "Take any precaution to avoid mixing with combustibles."),
    ("P222", "Do not allow contact with air."),
    ("P223", "Do not allow contact with water."),
    ("P230", "Keep wetted with water."),
    ("P231", "Handle under inert gas."),
    ("P232", "Protect from moisture."),
    ("P233", "Keep container tightly closed."),
    ("P234", "Keep only in original container."),
    ("P235", "Keep cool."),
    ("P240", "Ground/bond container and receiving equipment."),
    ("P241", "Use explosion-proof electrical/ventilating/lighting equipment."),
    ("P242", "Use only non-sparking tools."),
    ("P243", "Take precautionary measures against static discharge."),
    ("P244", "Keep valves and fittings free from oil and grease."),
    ("P250", "Do not subject to grinding/shock/friction."),
    ("P251", "Pressurized container: Do not pierce or burn, even after use."),
    ("P260", "Do not breathe dust/fume/gas/mist/vapors/spray."),
    ("P261", "Avoid breathing dust/fume/gas/mist/vapors/spray."),
    ("P262", "Do not get in eyes, on skin, or on clothing."),
    ("P263", "Avoid contact during pregnancy/while nursing."),
    ("P264", "Wash hands thoroughly after handling."),
    ("P270", "Do not eat, drink or smoke when using this product."),
    ("P271", "Use only outdoors or in a well-ventilated area."),
    ("P272", "Contaminated work clothing should not be allowed out of the workplace."),
    ("P273", "Avoid release to the environment."),
    ("P280", "Wear protective gloves/protective clothing/eye protection/face protection."),
    ("P281", "Use personal protective equipment as required."),
    ("P282", "Wear cold insulating gloves/face shield/eye protection."),
    ("P283", "Wear fire/flame resistant/retardant clothing."),
    ("P284", "Wear respiratory protection."),
    ("P285", "In case of inadequate ventilation wear respiratory protection."),
    ("P301", "IF SWALLOWED:"),
    ("P302", "IF ON SKIN:"),
    ("P303", "IF ON SKIN (or hair):"),
    ("P304", "IF INHALED:"),
    ("P305", "IF IN EYES:"),
    ("P306", "IF ON CLOTHING:"),
    ("P307", "IF exposed:"),
    ("P308", "IF exposed or concerned:"),
    ("P309", "IF exposed or if you feel unwell:"),
    ("P310", "Immediately call a POISON CENTER or doctor/physician."),
    ("P311", "Call a POISON CENTER or doctor/physician."),
    ("P312", "Call a POISON CENTER or doctor/physician if you feel unwell."),
    ("P313", "Get medical advice/attention."),
    ("P314", "Get medical advice/attention if you feel unwell."),
    ("P315", "Get immediate medical advice/attention."),
    ("P320", "Specific treatment is urgent (see supplemental first aid instructions on this label)."),
    ("P321", "Specific treatment (see supplemental first aid instructions on this label)."),
    ("P322", "Specific measures (see supplemental first aid instructions on this label)."),
    ("P330", "Rinse mouth."),
    ("P331", "Do NOT induce vomiting."),
    ("P332", "If skin irritation occurs:"),
    ("P333", "If skin irritation or rash occurs:"),
    ("P334", "Immerse in cool water/wrap in wet bandages."),
    ("P335", "Brush off loose particles from skin."),
    ("P336", "Thaw frosted parts with lukewarm water. Do not rub affected area."),
    ("P337", "If eye irritation persists:"),
    ("P338", "Remove contact lenses, if present and easy to do. Continue rinsing."),
    ("P340", "Remove person to fresh air and keep comfortable for breathing."),
    ("P341", "If breathing is difficult, remove person to fresh air and keep comfortable for breathing."),
    ("P342", "If experiencing respiratory symptoms:"),
    ("P350", "Gently wash with plenty of soap and water."),
    ("P351", "Rinse cautiously with water for several minutes."),
    ("P352", "Wash with plenty of soap and water."),
    ("P353", "Rinse skin with water/shower."),
    ("P360", "Rinse immediately contaminated clothing and skin with plenty of water before removing clothes."),
    ("P361", "Remove/Take off immediately all contaminated clothing."),
    ("P362", "Take off contaminated clothing and wash before reuse."),
    ("P363", "Wash contaminated clothing before reuse."),
    ("P364", "And wash it before reuse."),
    ("P370", "In case of fire:"),
    ("P371", "In case of major fire and large quantities:"),
    ("P372", "Explosion risk in case of fire."),
    ("P373", "DO NOT fight fire when fire reaches explosives."),
    ("P374", "Fight fire with normal precautions from a reasonable distance."),
    ("P375", "Fight fire remotely due to the risk of explosion."),
    ("P376", "Stop leak if safe to do so."),
    ("P377", "Leaking gas fire: Do not extinguish, unless leak can be stopped safely."),
    ("P378", "Use dry sand, dry chemical or alcohol-resistant foam for extinction."),
    ("P380", "Evacuate area."),
    ("P381", "Eliminate all ignition sources if safe to do so."),
    ("P390", "Absorb spillage to prevent material damage."),
    ("P391", "Collect spillage."),
    ("P401", "Store in accordance with local/regional/national/international regulations."),
    ("P402", "Store in a dry place."),
    ("P403", "Store in a well-ventilated place."),
    ("P404", "Store in a closed container."),
    ("P405", "Store locked up."),
    ("P406", "Store in corrosive resistant container with resistant inner liner."),
    ("P407", "Maintain air gap between stacks/pallets."),
    ("P410", "Protect from sunlight."),
    ("P411", "Store at temperatures not exceeding specified temperature."),
    ("P412", "Do not expose to temperatures exceeding 50°C/122°F."),
    ("P413", "Store bulk masses greater than specified value at temperatures not exceeding specified temperature."),
    ("P420", "Store away from other materials."),
    ("P501", "Dispose of contents/container in accordance with local/regional/national/international regulations."),
    ("P502", "Refer to manufacturer or supplier for information on recovery or recycling."),
    // ── Combined statements ─────────────────────────────────────────────
    ("P301+P310", "IF SWALLOWED: Immediately call a POISON CENTER or doctor/physician."),
    ("P301+P312", "IF SWALLOWED: Call a POISON CENTER or doctor/physician if you feel unwell."),
    ("P301+P330+P331", "IF SWALLOWED: Rinse mouth. Do NOT induce vomiting."),
    ("P302+P334", "IF ON SKIN: Immerse in cool water/wrap in wet bandages."),
    ("P302+P350", "IF ON SKIN: Gently wash with plenty of soap and water."),
    ("P302+P352", "IF ON SKIN: Wash with plenty of soap and water."),
    ("P303+P361+P353", "IF ON SKIN (or hair): Remove/Take off immediately all contaminated clothing. Rinse skin with water/shower."),
    ("P304+P312", "IF INHALED: Call a POISON CENTER or doctor/physician if you feel unwell."),
    ("P304+P340", "IF INHALED: Remove person to fresh air and keep comfortable for breathing."),
    ("P304+P341", "IF INHALED: If breathing is difficult, remove person to fresh air and keep comfortable for breathing."),
    ("P305+P351+P338", "IF IN EYES: Rinse cautiously with water for several minutes. Remove contact lenses, if present and easy to do. Continue rinsing."),
    ("P306+P360", "IF ON CLOTHING: Rinse immediately contaminated clothing and skin with plenty of water before removing clothes."),
    ("P307+P311", "IF exposed: Call a POISON CENTER or doctor/physician."),
    ("P308+P313", "IF exposed or concerned: Get medical advice/attention."),
    ("P309+P311", "IF exposed or if you feel unwell: Call a POISON CENTER or doctor/physician."),
    ("P332+P313", "If skin irritation occurs: Get medical advice/attention."),
    ("P333+P313", "If skin irritation or rash occurs: Get medical advice/attention."),
    ("P335+P334", "Brush off loose particles from skin. Immerse in cool water/wrap in wet bandages."),
    ("P337+P313", "If eye irritation persists: Get medical advice/attention."),
    ("P342+P311", "If experiencing respiratory symptoms: Call a POISON CENTER or doctor/physician."),
    ("P370+P376", "In case of fire: Stop leak if safe to do so."),
    ("P370+P378", "In case of fire: Use dry sand, dry chemical or alcohol-resistant foam for extinction."),
    ("P370+P380", "In case of fire: Evacuate area."),
    ("P370+P380+P375", "In case of fire: Evacuate area. Fight fire remotely due to the risk of explosion."),
    ("P371+P380+P375", "In case of major fire and large quantities: Evacuate area. Fight fire remotely due to the risk of explosion."),
    ("P402+P404", "Store in a dry place. Store in a closed container."),
    ("P403+P233", "Store in a well-ventilated place. Keep container tightly closed."),
    ("P403+P235", "Store in a well-ventilated place. Keep cool."),
    ("P410+P403", "Protect from sunlight. Store in a well-ventilated place."),
    ("P410+P412", "Protect from sunlight. Do not expose to temperatures exceeding 50°C/122°F."),
];

/// `(code, canonical text)` for EU supplemental statements.
pub(crate) const SUPPLEMENTAL_STATEMENTS: &[(&str, &str)] = &[
    ("EUH001", "Explosive when dry."),
    ("EUH006", "Explosive with or without contact with air."),
    ("EUH014", "Reacts violently with water."),
    ("EUH018", "In use, may form flammable/explosive vapor-air mixture."),
    ("EUH019", "May form explosive peroxides."),
    ("EUH029", "Contact with water liberates toxic gas."),
    ("EUH031", "Contact with acids liberates toxic gas."),
    ("EUH032", "Contact with acids liberates very toxic gas."),
    ("EUH044", "Risk of explosion if heated under confinement."),
    ("EUH066", "Repeated exposure may cause skin dryness or cracking."),
    ("EUH070", "Toxic by eye contact."),
    ("EUH071", "Corrosive to the respiratory tract."),
    ("EUH201", "Contains lead. Should not be used on surfaces liable to be chewed or sucked by children."),
    ("EUH202", "Cyanoacrylate. Danger. Bonds skin and eyes in seconds. Keep out of the reach of children."),
    ("EUH203", "Contains chromium (VI). May produce an allergic reaction."),
    ("EUH204", "Contains isocyanates. May produce an allergic reaction."),
    ("EUH205", "Contains epoxy constituents. May produce an allergic reaction."),
    ("EUH206", "Warning! Do not use together with other products. May release dangerous gases (chlorine)."),
    ("EUH207", "Warning! Contains cadmium. Dangerous fumes are formed during use. See information supplied by the manufacturer. Comply with the safety instructions."),
    ("EUH208", "Contains sensitizing substance. May produce an allergic reaction."),
    ("EUH209", "Can become highly flammable in use."),
    ("EUH210", "Safety data sheet available on request."),
    ("EUH401", "To avoid risks to human health and the environment, comply with the instructions for use."),
];

/// `(lowercase trigger phrase, supplemental code)`. Several phrases may map to
/// the same code.
pub(crate) const SUPPLEMENTAL_TRIGGERS: &[(&str, &str)] = &[
    ("sodium hypochlorite", "EUH031"),
    ("hypochlorite", "EUH031"),
    ("bleach", "EUH031"),
    ("chlorine", "EUH031"),
    ("cyanoacrylate", "EUH202"),
    ("chromium (vi)", "EUH203"),
    ("chromate", "EUH203"),
    ("isocyanate", "EUH204"),
    ("epoxy", "EUH205"),
    ("cadmium", "EUH207"),
];

/// Hazard codes implying each pictogram (GHS Annex 1).
pub(crate) const PICTOGRAM_MEMBERSHIP: &[(Pictogram, &[&str])] = &[
    (
        Pictogram::ExplodingBomb,
        &["H200", "H201", "H202", "H203", "H204", "H205", "H240", "H241"],
    ),
    (
        Pictogram::Flame,
        &[
            "H220", "H221", "H222", "H223", "H224", "H225", "H226", "H228", "H230", "H231",
            "H241", "H242", "H250", "H251", "H252", "H260", "H261",
        ],
    ),
    (Pictogram::FlameOverCircle, &["H270", "H271", "H272"]),
    (Pictogram::GasCylinder, &["H280", "H281"]),
    (Pictogram::Corrosion, &["H290", "H314", "H318"]),
    (
        Pictogram::SkullAndCrossbones,
        &["H300", "H301", "H310", "H311", "H330", "H331"],
    ),
    (
        Pictogram::ExclamationMark,
        &[
            "H302", "H312", "H315", "H317", "H319", "H332", "H335", "H336", "H420",
        ],
    ),
    (
        Pictogram::HealthHazard,
        &[
            "H304", "H334", "H340", "H341", "H350", "H351", "H360", "H361", "H370", "H371",
            "H372", "H373",
        ],
    ),
    (Pictogram::Environment, &["H400", "H410", "H411"]),
];

/// Hazard codes that require the `Danger` signal word.
pub(crate) const CRITICAL_HAZARD_CODES: &[&str] = &[
    "H200", "H201", "H202", "H203", "H205", "H220", "H222", "H224", "H225", "H230", "H231",
    "H240", "H241", "H250", "H251", "H260", "H270", "H271", "H300", "H301", "H304", "H310",
    "H311", "H314", "H318", "H330", "H331", "H334", "H340", "H350", "H360", "H370", "H372",
];

/// Hazard code → precautionary codes that must accompany it. A requirement
/// may itself be a combined code; it is met when all of its parts appear.
pub(crate) const MANDATORY_PRECAUTIONS: &[(&str, &[&str])] = &[
    ("H314", &["P280", "P305+P351+P338"]),
    ("H318", &["P280", "P305+P351+P338"]),
    ("H300", &["P301+P310"]),
    ("H310", &["P280"]),
    ("H330", &["P284"]),
    ("H340", &["P201"]),
    ("H350", &["P201"]),
    ("H360", &["P201"]),
    ("H224", &["P210"]),
    ("H225", &["P210"]),
    ("H226", &["P210"]),
    ("H400", &["P273"]),
    ("H410", &["P273"]),
];
