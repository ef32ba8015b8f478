pub const SAFETY_WARNING_MARKER: &str = "⚠️ SECURITY WARNING:";

pub const RECOMMENDATION_COUNT_INSTRUCTION: &str =
    "Recommend exactly 2 specific locations that satisfy every constraint above.";

pub const SAFETY_PROTOCOL: &str = "CRITICAL SAFETY PROTOCOL:
1. If you recommend ANY city in Colombia (especially Medellin/Bogota), you MUST include a bold warning block starting with \"⚠️ SECURITY WARNING:\" before any other content about that city, explaining that Americans/Westerners are currently being targeted and dating apps can be dangerous. Be realistic about crime rates.
2. For all other cities, include a \"Safety Score\" (1-10) and a brief mention of specific risks (pickpockets, scams, etc).";

pub const OUTPUT_SCHEMA: &str = "Format output as Markdown:

## 🌴 City Name, Country
**The Vibe:** [One sentence summary]

| Feature | Rating/Cost |
| :--- | :--- |
| 💸 Est. Cost | [Amount] |
| 🛡️ Safety Score | [X/10] |
| 🚀 Best for | [Key Benefit] |

**The Strategy:** [Why this fits their lifestyle vision]

(If Colombia: Insert WARNING text here)

---
(Repeat for City 2)";

pub const DEFAULT_CLOSING: &str = "End with a professional, encouraging closing statement.";

/// Prepended when a flagged location shows up without the warning block.
pub const FALLBACK_SAFETY_WARNING: &str = "**⚠️ SECURITY WARNING:** This recommendation mentions Colombia. Foreign visitors, Americans and Westerners in particular, are currently being targeted, and meetings arranged through dating apps can be dangerous. Research current crime rates and local guidance before you travel.";
