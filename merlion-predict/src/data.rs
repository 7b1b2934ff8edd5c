//! Static embedded datasets: official aggregate frequency tables and
//! recent published draws. Immutable for the process lifetime; scoring
//! reads them, nothing writes back.

use crate::models::{FourdDraw, LegacyDraw, TotoDraw, TotoFrequencyRow};

/// Singapore Pools "top 100 frequently drawn" 4D table: number, times drawn.
pub const FOURD_TOP_100: [(&str, u32); 100] = [
    ("9395", 29),
    ("6741", 28),
    ("3225", 27),
    ("4785", 27),
    ("5807", 27),
    ("2698", 26),
    ("1845", 25),
    ("1942", 25),
    ("2967", 25),
    ("3581", 25),
    ("4678", 25),
    ("4946", 25),
    ("5468", 25),
    ("7683", 25),
    ("8887", 25),
    ("9509", 25),
    ("0400", 24),
    ("0732", 24),
    ("1238", 24),
    ("2000", 24),
    ("2942", 24),
    ("3005", 24),
    ("3445", 24),
    ("4527", 24),
    ("6556", 24),
    ("6766", 24),
    ("7539", 24),
    ("9281", 24),
    ("9306", 24),
    ("0223", 23),
    ("0409", 23),
    ("0875", 23),
    ("1273", 23),
    ("1275", 23),
    ("1464", 23),
    ("2175", 23),
    ("2314", 23),
    ("2636", 23),
    ("2700", 23),
    ("3975", 23),
    ("4156", 23),
    ("4601", 23),
    ("4840", 23),
    ("4880", 23),
    ("5043", 23),
    ("5263", 23),
    ("5374", 23),
    ("5934", 23),
    ("6290", 23),
    ("6412", 23),
    ("6440", 23),
    ("6990", 23),
    ("8182", 23),
    ("8373", 23),
    ("8846", 23),
    ("9007", 23),
    ("9282", 23),
    ("9651", 23),
    ("9693", 23),
    ("0379", 22),
    ("0386", 22),
    ("0389", 22),
    ("0567", 22),
    ("0852", 22),
    ("0885", 22),
    ("1005", 22),
    ("1047", 22),
    ("1180", 22),
    ("1438", 22),
    ("1849", 22),
    ("2756", 22),
    ("2807", 22),
    ("2939", 22),
    ("2941", 22),
    ("3198", 22),
    ("3657", 22),
    ("4291", 22),
    ("4421", 22),
    ("4470", 22),
    ("4616", 22),
    ("4979", 22),
    ("5281", 22),
    ("5502", 22),
    ("5510", 22),
    ("5614", 22),
    ("5760", 22),
    ("5788", 22),
    ("5790", 22),
    ("5872", 22),
    ("6124", 22),
    ("6147", 22),
    ("6676", 22),
    ("6750", 22),
    ("7234", 22),
    ("7505", 22),
    ("7753", 22),
    ("7816", 22),
    ("8045", 22),
    ("8207", 22),
    ("8282", 22),
];

/// Recent 4D draws: first/second/third prize, then ten starter and ten
/// consolation numbers, in published order.
pub const RECENT_FOURD_DRAWS: [FourdDraw; 11] = [
    FourdDraw {
        draw_date: "2026-02-25",
        draw_no: "5449",
        numbers: [
            "8445", "6880", "7342", "0206", "0506", "0615", "1336", "3150", "3330", "4708", "5831",
            "8525", "9567", "0188", "1246", "1391", "2185", "5131", "5515", "6277", "8360", "8687",
            "9397",
        ],
    },
    FourdDraw {
        draw_date: "2026-02-22",
        draw_no: "5448",
        numbers: [
            "2905", "3120", "6629", "0672", "1662", "1887", "1970", "4048", "5810", "6628", "7507",
            "8372", "9856", "0540", "0580", "1164", "1648", "1986", "2956", "3372", "4756", "4961",
            "7197",
        ],
    },
    FourdDraw {
        draw_date: "2026-02-18",
        draw_no: "5447",
        numbers: [
            "5688", "6228", "9150", "0477", "1332", "2735", "3018", "4076", "4651", "5509", "6146",
            "7849", "8844", "0795", "1774", "2086", "2114", "2837", "3608", "4832", "5059", "6176",
            "6249",
        ],
    },
    FourdDraw {
        draw_date: "2026-02-11",
        draw_no: "5443",
        numbers: [
            "5510", "0876", "0529", "0245", "2130", "2438", "3414", "3753", "4093", "5569", "7867",
            "8167", "8518", "0034", "0278", "0958", "1469", "1482", "3405", "6117", "6492", "6881",
            "9882",
        ],
    },
    FourdDraw {
        draw_date: "2026-02-08",
        draw_no: "5442",
        numbers: [
            "1135", "9006", "6501", "0138", "0814", "1234", "3260", "4243", "5478", "6731", "7194",
            "8577", "9047", "1272", "1567", "2570", "2672", "3622", "5735", "5783", "5832", "8320",
            "9897",
        ],
    },
    FourdDraw {
        draw_date: "2026-02-07",
        draw_no: "5441",
        numbers: [
            "1516", "8047", "7919", "0743", "1239", "3077", "3246", "4394", "5148", "5232", "7734",
            "8070", "9023", "0001", "0979", "1259", "2206", "3038", "4327", "6510", "6852", "7464",
            "7505",
        ],
    },
    FourdDraw {
        draw_date: "2026-02-01",
        draw_no: "5439",
        numbers: [
            "7970", "0896", "0553", "1818", "2021", "3015", "4271", "4932", "6175", "8533", "9134",
            "9406", "9463", "1931", "1952", "2144", "3346", "4713", "6872", "6946", "8339", "8658",
            "9806",
        ],
    },
    FourdDraw {
        draw_date: "2026-01-31",
        draw_no: "5438",
        numbers: [
            "2490", "7164", "6555", "0249", "0285", "2225", "2628", "3631", "4235", "6547", "6661",
            "8293", "9354", "3717", "4115", "4439", "5336", "6334", "6399", "6870", "7138", "9339",
            "9813",
        ],
    },
    FourdDraw {
        draw_date: "2024-04-07",
        draw_no: "5154",
        numbers: [
            "2194", "1562", "6955", "0094", "0143", "1416", "5626", "6314", "6746", "8586", "8728",
            "8818", "9645", "0223", "0644", "1195", "1326", "5765", "5989", "6805", "7817", "8470",
            "9175",
        ],
    },
    FourdDraw {
        draw_date: "2024-04-06",
        draw_no: "5153",
        numbers: [
            "4437", "9844", "2406", "1446", "2993", "3322", "4340", "5281", "5546", "5921", "8650",
            "9227", "9858", "0309", "0697", "2469", "3222", "4094", "7254", "7660", "8148", "8711",
            "9106",
        ],
    },
    FourdDraw {
        draw_date: "2024-04-03",
        draw_no: "5152",
        numbers: [
            "1755", "4508", "3542", "1830", "2209", "2260", "3315", "4554", "6220", "6901", "7684",
            "8278", "9206", "0859", "0912", "3181", "3288", "3699", "4235", "4669", "7985", "8467",
            "9800",
        ],
    },
];

/// Official winning-number frequency table, balls 1..=49:
/// (main appearances, additional appearances).
pub const TOTO_FREQUENCY: [TotoFrequencyRow; 49] = [
    TotoFrequencyRow { ball: 1, main_freq: 153, additional_freq: 27 },
    TotoFrequencyRow { ball: 2, main_freq: 148, additional_freq: 26 },
    TotoFrequencyRow { ball: 3, main_freq: 138, additional_freq: 21 },
    TotoFrequencyRow { ball: 4, main_freq: 143, additional_freq: 16 },
    TotoFrequencyRow { ball: 5, main_freq: 149, additional_freq: 20 },
    TotoFrequencyRow { ball: 6, main_freq: 139, additional_freq: 31 },
    TotoFrequencyRow { ball: 7, main_freq: 134, additional_freq: 23 },
    TotoFrequencyRow { ball: 8, main_freq: 149, additional_freq: 25 },
    TotoFrequencyRow { ball: 9, main_freq: 145, additional_freq: 18 },
    TotoFrequencyRow { ball: 10, main_freq: 150, additional_freq: 24 },
    TotoFrequencyRow { ball: 11, main_freq: 137, additional_freq: 16 },
    TotoFrequencyRow { ball: 12, main_freq: 153, additional_freq: 23 },
    TotoFrequencyRow { ball: 13, main_freq: 137, additional_freq: 24 },
    TotoFrequencyRow { ball: 14, main_freq: 133, additional_freq: 19 },
    TotoFrequencyRow { ball: 15, main_freq: 170, additional_freq: 20 },
    TotoFrequencyRow { ball: 16, main_freq: 134, additional_freq: 27 },
    TotoFrequencyRow { ball: 17, main_freq: 139, additional_freq: 19 },
    TotoFrequencyRow { ball: 18, main_freq: 134, additional_freq: 26 },
    TotoFrequencyRow { ball: 19, main_freq: 140, additional_freq: 23 },
    TotoFrequencyRow { ball: 20, main_freq: 141, additional_freq: 36 },
    TotoFrequencyRow { ball: 21, main_freq: 137, additional_freq: 28 },
    TotoFrequencyRow { ball: 22, main_freq: 154, additional_freq: 22 },
    TotoFrequencyRow { ball: 23, main_freq: 137, additional_freq: 24 },
    TotoFrequencyRow { ball: 24, main_freq: 147, additional_freq: 24 },
    TotoFrequencyRow { ball: 25, main_freq: 129, additional_freq: 24 },
    TotoFrequencyRow { ball: 26, main_freq: 135, additional_freq: 20 },
    TotoFrequencyRow { ball: 27, main_freq: 139, additional_freq: 25 },
    TotoFrequencyRow { ball: 28, main_freq: 155, additional_freq: 20 },
    TotoFrequencyRow { ball: 29, main_freq: 129, additional_freq: 28 },
    TotoFrequencyRow { ball: 30, main_freq: 146, additional_freq: 24 },
    TotoFrequencyRow { ball: 31, main_freq: 147, additional_freq: 31 },
    TotoFrequencyRow { ball: 32, main_freq: 152, additional_freq: 13 },
    TotoFrequencyRow { ball: 33, main_freq: 120, additional_freq: 32 },
    TotoFrequencyRow { ball: 34, main_freq: 143, additional_freq: 30 },
    TotoFrequencyRow { ball: 35, main_freq: 151, additional_freq: 25 },
    TotoFrequencyRow { ball: 36, main_freq: 147, additional_freq: 26 },
    TotoFrequencyRow { ball: 37, main_freq: 146, additional_freq: 24 },
    TotoFrequencyRow { ball: 38, main_freq: 139, additional_freq: 18 },
    TotoFrequencyRow { ball: 39, main_freq: 135, additional_freq: 23 },
    TotoFrequencyRow { ball: 40, main_freq: 165, additional_freq: 16 },
    TotoFrequencyRow { ball: 41, main_freq: 131, additional_freq: 24 },
    TotoFrequencyRow { ball: 42, main_freq: 124, additional_freq: 27 },
    TotoFrequencyRow { ball: 43, main_freq: 139, additional_freq: 19 },
    TotoFrequencyRow { ball: 44, main_freq: 149, additional_freq: 26 },
    TotoFrequencyRow { ball: 45, main_freq: 117, additional_freq: 20 },
    TotoFrequencyRow { ball: 46, main_freq: 154, additional_freq: 25 },
    TotoFrequencyRow { ball: 47, main_freq: 134, additional_freq: 20 },
    TotoFrequencyRow { ball: 48, main_freq: 145, additional_freq: 31 },
    TotoFrequencyRow { ball: 49, main_freq: 154, additional_freq: 28 },
];

/// Recent Toto draws, most recent first.
pub const RECENT_TOTO_DRAWS: [TotoDraw; 28] = [
    TotoDraw { draw_no: "4157", draw_date: "2026-02-16", winning: [13, 24, 28, 34, 37, 44], additional: 29 },
    TotoDraw { draw_no: "4156", draw_date: "2026-02-13", winning: [10, 15, 25, 43, 45, 49], additional: 4 },
    TotoDraw { draw_no: "4155", draw_date: "2026-02-09", winning: [10, 15, 29, 31, 33, 49], additional: 30 },
    TotoDraw { draw_no: "4154", draw_date: "2026-02-05", winning: [6, 18, 24, 26, 36, 48], additional: 5 },
    TotoDraw { draw_no: "4153", draw_date: "2026-02-02", winning: [4, 19, 40, 41, 46, 47], additional: 20 },
    TotoDraw { draw_no: "4152", draw_date: "2026-01-29", winning: [11, 13, 16, 31, 42, 48], additional: 21 },
    TotoDraw { draw_no: "4151", draw_date: "2026-01-26", winning: [10, 11, 13, 26, 32, 39], additional: 44 },
    TotoDraw { draw_no: "4150", draw_date: "2026-01-22", winning: [6, 22, 27, 32, 37, 44], additional: 19 },
    TotoDraw { draw_no: "4149", draw_date: "2026-01-19", winning: [4, 11, 21, 23, 31, 35], additional: 48 },
    TotoDraw { draw_no: "4148", draw_date: "2026-01-15", winning: [16, 32, 34, 35, 36, 41], additional: 14 },
    TotoDraw { draw_no: "4147", draw_date: "2026-01-12", winning: [1, 9, 16, 18, 35, 43], additional: 12 },
    TotoDraw { draw_no: "4146", draw_date: "2026-01-08", winning: [3, 14, 15, 17, 25, 27], additional: 31 },
    TotoDraw { draw_no: "4145", draw_date: "2026-01-05", winning: [5, 20, 35, 39, 40, 49], additional: 27 },
    TotoDraw { draw_no: "4144", draw_date: "2026-01-02", winning: [11, 18, 20, 32, 38, 39], additional: 34 },
    TotoDraw { draw_no: "4143", draw_date: "2025-12-29", winning: [2, 4, 22, 24, 30, 33], additional: 49 },
    TotoDraw { draw_no: "4142", draw_date: "2025-12-25", winning: [3, 8, 15, 28, 37, 43], additional: 49 },
    TotoDraw { draw_no: "4141", draw_date: "2025-12-22", winning: [4, 5, 13, 22, 24, 30], additional: 36 },
    TotoDraw { draw_no: "4140", draw_date: "2025-12-18", winning: [2, 14, 15, 30, 31, 43], additional: 27 },
    TotoDraw { draw_no: "4139", draw_date: "2025-12-15", winning: [17, 21, 22, 35, 37, 42], additional: 9 },
    TotoDraw { draw_no: "4138", draw_date: "2025-12-11", winning: [6, 11, 20, 28, 33, 43], additional: 16 },
    TotoDraw { draw_no: "4137", draw_date: "2025-12-08", winning: [9, 12, 15, 23, 27, 47], additional: 45 },
    TotoDraw { draw_no: "4136", draw_date: "2025-12-04", winning: [1, 5, 24, 36, 41, 46], additional: 39 },
    TotoDraw { draw_no: "4135", draw_date: "2025-12-01", winning: [2, 10, 24, 35, 45, 49], additional: 37 },
    TotoDraw { draw_no: "4134", draw_date: "2025-11-27", winning: [6, 8, 17, 28, 32, 46], additional: 16 },
    TotoDraw { draw_no: "4133", draw_date: "2025-11-24", winning: [8, 25, 27, 34, 45, 47], additional: 19 },
    TotoDraw { draw_no: "4132", draw_date: "2025-11-20", winning: [11, 13, 22, 31, 47, 49], additional: 39 },
    TotoDraw { draw_no: "4131", draw_date: "2025-11-17", winning: [3, 9, 12, 18, 19, 34], additional: 24 },
    TotoDraw { draw_no: "4130", draw_date: "2025-11-13", winning: [6, 13, 18, 22, 34, 35], additional: 40 },
];

/// Draws behind the legacy pair predictor, most recent first.
pub const LEGACY_DRAWS: [LegacyDraw; 8] = [
    LegacyDraw { date: "2026-02-09", numbers: [10, 15, 29, 31, 33, 49] },
    LegacyDraw { date: "2024-04-15", numbers: [5, 10, 28, 36, 41, 42] },
    LegacyDraw { date: "2024-04-11", numbers: [22, 28, 33, 40, 43, 47] },
    LegacyDraw { date: "2024-04-08", numbers: [12, 23, 24, 34, 43, 46] },
    LegacyDraw { date: "2024-04-04", numbers: [3, 4, 13, 31, 36, 43] },
    LegacyDraw { date: "2024-03-28", numbers: [6, 8, 13, 17, 26, 37] },
    LegacyDraw { date: "2024-03-18", numbers: [1, 4, 6, 15, 30, 48] },
    LegacyDraw { date: "2024-03-14", numbers: [8, 26, 34, 35, 45, 46] },
];
