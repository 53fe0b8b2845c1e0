//! 内置调色板
//!
//! 色阶取自 Tailwind v2 默认主题，`DEFAULT` 与 500 相同。

use phf::phf_map;

type Shades = &'static [(&'static str, &'static str)];

/// 不分色阶的颜色
pub static FLAT_COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    "black" => "#000",
    "white" => "#fff",
};

/// 颜色名 → 色阶表
pub static SHADED_COLORS: phf::Map<&'static str, Shades> = phf_map! {
    "gray" => &[
        ("50", "#f9fafb"), ("100", "#f3f4f6"), ("200", "#e5e7eb"), ("300", "#d1d5db"),
        ("400", "#9ca3af"), ("500", "#6b7280"), ("600", "#4b5563"), ("700", "#374151"),
        ("800", "#1f2937"), ("900", "#111827"), ("DEFAULT", "#6b7280"),
    ],
    "red" => &[
        ("50", "#fef2f2"), ("100", "#fee2e2"), ("200", "#fecaca"), ("300", "#fca5a5"),
        ("400", "#f87171"), ("500", "#ef4444"), ("600", "#dc2626"), ("700", "#b91c1c"),
        ("800", "#991b1b"), ("900", "#7f1d1d"), ("DEFAULT", "#ef4444"),
    ],
    "yellow" => &[
        ("50", "#fffbeb"), ("100", "#fef3c7"), ("200", "#fde68a"), ("300", "#fcd34d"),
        ("400", "#fbbf24"), ("500", "#f59e0b"), ("600", "#d97706"), ("700", "#b45309"),
        ("800", "#92400e"), ("900", "#78350f"), ("DEFAULT", "#f59e0b"),
    ],
    "green" => &[
        ("50", "#ecfdf5"), ("100", "#d1fae5"), ("200", "#a7f3d0"), ("300", "#6ee7b7"),
        ("400", "#34d399"), ("500", "#10b981"), ("600", "#059669"), ("700", "#047857"),
        ("800", "#065f46"), ("900", "#064e3b"), ("DEFAULT", "#10b981"),
    ],
    "blue" => &[
        ("50", "#eff6ff"), ("100", "#dbeafe"), ("200", "#bfdbfe"), ("300", "#93c5fd"),
        ("400", "#60a5fa"), ("500", "#3b82f6"), ("600", "#2563eb"), ("700", "#1d4ed8"),
        ("800", "#1e40af"), ("900", "#1e3a8a"), ("DEFAULT", "#3b82f6"),
    ],
};
