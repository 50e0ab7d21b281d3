use cutbox_designs::{
    BoxDesign, CutGroup, Cutline, DesignKind, Drawing, MatchboxMaker, MatchboxParameters,
    Rotation, SizeRegime, Template, ThumbholeMode,
};
use cutbox_settings::{Settings, SettingsBuilder};
use toml::Table;

fn settings(kind: DesignKind, section: &str) -> Settings {
    let section: Table = section.parse().unwrap();
    SettingsBuilder::new()
        .layer("defaults", kind.defaults())
        .layer("section", section)
        .build()
        .unwrap()
}

fn matchbox(section: &str) -> MatchboxMaker {
    let s = settings(DesignKind::Matchbox, section);
    MatchboxMaker::new(MatchboxParameters::from_settings(&s).unwrap()).unwrap()
}

fn all_cutlines(groups: &[CutGroup]) -> Vec<Cutline> {
    groups.iter().flat_map(|g| g.cutlines.clone()).collect()
}

#[test]
fn small_box_with_single_funnel() {
    let maker = matchbox(
        "length = 60\nwidth = 40\nheight = 15\nthickness = 1.5\nthumbhole = \"none\"\nsingle_funnel = true",
    );
    assert_eq!(maker.regime(), SizeRegime::Small);
    assert_eq!(maker.corners().len(), 34);

    let cutlines = all_cutlines(maker.cut_groups());
    // right wall split into top, upper and lower runs
    assert!(cutlines.contains(&Cutline::continue_line(&[6, 7])));
    assert!(cutlines.contains(&Cutline::continue_line(&[7, 14])));
    assert!(cutlines.contains(&Cutline::continue_line(&[15, 16, 17])));
    // straight joins where a notch would go
    assert!(cutlines.contains(&Cutline::continue_line(&[14, 15])));
    assert!(cutlines.contains(&Cutline::continue_line(&[26, 27])));
    assert!(!cutlines
        .iter()
        .any(|c| matches!(c, Cutline::HalfCircle { .. })));
}

#[test]
fn large_box_with_double_thumbhole() {
    let maker = matchbox(
        "length = 60\nwidth = 40\nheight = 30\nthickness = 1.5\nthumbhole = \"double\"",
    );
    assert_eq!(maker.regime(), SizeRegime::Large);
    assert_eq!(maker.thumbhole(), ThumbholeMode::Double);
    assert_eq!(maker.corners().len(), 50);

    let cutlines = all_cutlines(maker.cut_groups());
    let halves: Vec<(usize, usize)> = cutlines
        .iter()
        .filter_map(|c| match c {
            Cutline::HalfCircle { from, to, rotation, .. } => {
                assert_eq!(*rotation, Rotation::CounterClockwise);
                Some((*from, *to))
            }
            _ => None,
        })
        .collect();
    assert_eq!(halves, vec![(10, 11), (26, 27)]);

    let c = maker.corners();
    assert_eq!(c[10].y, c[27].y);
    assert_eq!(c[11].y, c[26].y);
}

#[test]
fn legacy_switches_prefer_single() {
    let maker = matchbox(
        "length = 60\nwidth = 40\nheight = 30\nthickness = 1.5\nsingle_thumbhole = true\ndouble_thumbhole = true",
    );
    assert_eq!(maker.thumbhole(), ThumbholeMode::Single);
}

#[test]
fn enforce_small_overrides_threshold() {
    let maker = matchbox(
        "length = 60\nwidth = 40\nheight = 30\nthickness = 1.5\nenforce_small = true",
    );
    assert_eq!(maker.regime(), SizeRegime::Small);

    let maker = matchbox(
        "length = 60\nwidth = 40\nheight = 15\nthickness = 1.5\nenforce_large = true",
    );
    assert_eq!(maker.regime(), SizeRegime::Large);
}

#[test]
fn separated_layout_translates_panels() {
    let maker = matchbox(
        "length = 60\nwidth = 40\nheight = 15\nthickness = 1.5\nseparated = true\nseparation = 5",
    );
    let groups = maker.cut_groups();
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["top", "center", "bottom", "left", "right"]);

    let c = maker.corners();
    let separation = maker.params().separation;
    let step = (c[1].x - c[0].x).abs() + separation;
    assert_eq!(step, maker.params().thickness + separation);

    let offsets: Vec<(i64, i64)> = groups.iter().map(|g| g.offset).collect();
    assert_eq!(
        offsets,
        vec![(step, 0), (step, step), (step, 2 * step), (0, step), (2 * step, step)]
    );
}

#[test]
fn separated_svg_carries_transforms() {
    let s = settings(
        DesignKind::Matchbox,
        "length = 60\nwidth = 40\nheight = 15\nthickness = 1.5\nseparated = true",
    );
    let design = DesignKind::Matchbox.build(&s).unwrap();
    let drawing = Drawing::create(design.as_ref(), s.converter(), 0).unwrap();
    assert_eq!(drawing.paths().len(), 5);
    assert!(drawing.paths()[0].contains("transform=\"translate("));
    // the left panel only moves down
    assert!(drawing.paths()[3].contains("transform=\"translate(0.0000 "));
}

#[test]
fn every_design_renders_to_svg() {
    let base = "length = 60\nwidth = 40\nheight = 15\nthickness = 1.5";
    let template = Template::builtin().unwrap();
    for kind in DesignKind::ALL {
        let s = settings(kind, base);
        let design = kind.build(&s).unwrap();
        let drawing = Drawing::create(design.as_ref(), s.converter(), 10_000).unwrap();
        let svg = drawing.to_svg(&template, kind.tag());
        assert!(svg.starts_with("<?xml"), "{}", kind);
        assert!(svg.contains("<path id="), "{}", kind);
        assert!(!svg.contains("{{"), "{}", kind);
    }
}

#[test]
fn mil_unit_changes_scale_only() {
    let mm = settings(DesignKind::Corner, "length = 30\nwidth = 30\nheight = 15\nthickness = 1");
    let mil = settings(
        DesignKind::Corner,
        "unit = \"mil\"\nlength = \"30mm\"\nwidth = \"30mm\"\nheight = \"15mm\"\nthickness = \"1mm\"",
    );
    let a = DesignKind::Corner.build(&mm).unwrap();
    let b = DesignKind::Corner.build(&mil).unwrap();
    assert_eq!(a.corners(), b.corners());
}

#[test]
fn unusable_measures_fail_instead_of_overflowing() {
    let cases = [
        (DesignKind::Matchbox, "length = 60\nwidth = 40\nheight = \"1e300\"\nthickness = 1.5"),
        (DesignKind::Corner, "length = inf\nwidth = 30\nheight = 15\nthickness = 1"),
        (DesignKind::CardBox, "length = 90\nwidth = 1e300\nheight = 20\nthickness = 1"),
        (DesignKind::CardSheet, "length = 88\nwidth = 63\ncolumns = 4000000000"),
        (DesignKind::Partition, "length = 100\nwidth = 80\nheight = 30\nthickness = -inf"),
    ];
    for (kind, section) in cases {
        let s = settings(kind, section);
        assert!(kind.build(&s).is_err(), "{} accepted {:?}", kind, section);
    }
}
