use super::*;
use crate::catalog::catalog;
use crate::palette::PaletteColor;

const SIZE: Size = Size::new(128, 128);

fn draw(effect: Effect, index: u32, count: u32) -> Frame {
    effect.draw(index, count, SIZE).unwrap()
}

fn count_color(frame: &Frame, color: PaletteColor) -> usize {
    frame
        .pixels()
        .filter(|(_, _, px)| *px == color.rgba())
        .count()
}

#[test]
fn test_every_effect_is_deterministic() {
    for effect in Effect::ALL {
        for index in [0, 5, 11] {
            let a = draw(effect, index, 12);
            let b = draw(effect, index, 12);
            assert_eq!(a, b, "{effect:?} frame {index} differs between calls");
        }
    }
}

#[test]
fn test_drawing_order_does_not_matter() {
    // No state carries over from one call to the next.
    for effect in Effect::ALL {
        let fresh = draw(effect, 7, 12);
        for index in 0..12 {
            let _ = draw(effect, index, 12);
        }
        assert_eq!(draw(effect, 7, 12), fresh, "{effect:?}");
    }
}

fn assert_on_palette(frame: &Frame, what: &str) {
    for (x, y, px) in frame.pixels() {
        assert!(
            PaletteColor::from_rgba(px).is_some(),
            "{what} pixel ({x}, {y}) = {px:?}"
        );
    }
}

#[test]
fn test_frames_stay_on_palette() {
    for def in catalog() {
        for index in 0..def.frame_count {
            let frame = def.effect.draw(index, def.frame_count, def.size).unwrap();
            assert_on_palette(&frame, &format!("{} frame {index}", def.name));
        }
    }
}

#[test]
fn test_large_frame_indices_draw() {
    let size = Size::new(8, 8);
    let cases = [
        (0, u32::MAX),
        (u32::MAX / 2, u32::MAX),
        (u32::MAX - 2, u32::MAX),
        (u32::MAX - 1, u32::MAX),
        (200_000_000, 200_000_001),
        (450_000_000, 500_000_000),
    ];
    for effect in Effect::ALL {
        for (index, count) in cases {
            let frame = effect.draw(index, count, size).unwrap();
            assert_eq!(frame.size(), size, "{effect:?}");
            assert_on_palette(&frame, &format!("{effect:?} frame {index}/{count}"));
        }
    }

    let count = 300_000_000;
    for index in [0, 1, count - 1] {
        assert_eq!(
            Effect::ShadowPortalExit.draw(index, count, size).unwrap(),
            Effect::ShadowPortalSpawn.draw(count - 1 - index, count, size).unwrap()
        );
    }
}

#[test]
fn test_frames_match_canvas_size() {
    let size = Size::new(96, 64);
    for effect in Effect::ALL {
        let frame = effect.draw(3, 12, size).unwrap();
        assert_eq!(frame.size(), size, "{effect:?}");
    }
}

#[test]
fn test_invalid_inputs_are_errors() {
    for effect in Effect::ALL {
        assert!(matches!(
            effect.draw(0, 0, SIZE),
            Err(FlipbookError::InvalidFrameCount(0))
        ));
        assert!(matches!(
            effect.draw(12, 12, SIZE),
            Err(FlipbookError::FrameIndexOutOfRange { index: 12, count: 12 })
        ));
        assert!(matches!(
            effect.draw(0, 12, Size::new(0, 128)),
            Err(FlipbookError::InvalidSize { .. })
        ));
    }
}

#[test]
fn test_burst_first_frame_is_opaque_white() {
    let frame = draw(Effect::RageSurgeBurst, 0, 12);
    assert!(frame
        .pixels()
        .all(|(_, _, px)| px == [255, 255, 255, 255]));

    let next = draw(Effect::RageSurgeBurst, 1, 12);
    assert_eq!(count_color(&next, PaletteColor::White), 0);
    assert!(count_color(&next, PaletteColor::Cyan) > 0);
}

#[test]
fn test_boss_entrance_flash_covers_geometry() {
    let frame = draw(Effect::BossEntrance, 0, 12);
    assert_eq!(count_color(&frame, PaletteColor::White), SIZE.pixel_count());

    let later = draw(Effect::BossEntrance, 1, 12);
    assert!(count_color(&later, PaletteColor::Purple) > 0);
    assert_eq!(count_color(&later, PaletteColor::Cyan), 0);

    let ring = draw(Effect::BossEntrance, 5, 12);
    assert!(count_color(&ring, PaletteColor::Cyan) > 0);
}

#[test]
fn test_portal_exit_mirrors_spawn() {
    for count in [1, 2, 7, 12] {
        for index in 0..count {
            let exit = Effect::ShadowPortalExit.draw(index, count, SIZE).unwrap();
            let spawn = Effect::ShadowPortalSpawn
                .draw(count - 1 - index, count, SIZE)
                .unwrap();
            assert_eq!(exit, spawn, "count {count}, index {index}");
        }
    }
}

#[test]
fn test_portal_exit_validates_before_reversing() {
    assert!(matches!(
        Effect::ShadowPortalExit.draw(5, 4, SIZE),
        Err(FlipbookError::FrameIndexOutOfRange { index: 5, count: 4 })
    ));
}

#[test]
fn test_cross_second_arc_starts_on_frame_three() {
    for index in 0..3 {
        let frame = draw(Effect::SlashCross, index, 12);
        assert_eq!(count_color(&frame, PaletteColor::Purple), 0, "frame {index}");
    }
    for index in 3..12 {
        let frame = draw(Effect::SlashCross, index, 12);
        assert!(count_color(&frame, PaletteColor::Purple) > 0, "frame {index}");
    }
}

#[test]
fn test_slam_switches_to_starburst_halfway() {
    for index in 0..6 {
        let frame = draw(Effect::SlamGround, index, 12);
        assert!(count_color(&frame, PaletteColor::Red) > 0, "frame {index}");
        assert_eq!(count_color(&frame, PaletteColor::Gold), 0, "frame {index}");
    }
    for index in 6..12 {
        let frame = draw(Effect::SlamGround, index, 12);
        assert_eq!(count_color(&frame, PaletteColor::Red), 0, "frame {index}");
        assert!(count_color(&frame, PaletteColor::Gold) > 0, "frame {index}");
    }
}

#[test]
fn test_uplift_apex_ring_only_on_second_to_last_frame() {
    for index in 0..12 {
        let frame = draw(Effect::SlashUplift, index, 12);
        let has_ring = count_color(&frame, PaletteColor::Purple) > 0;
        assert_eq!(has_ring, index == 10, "frame {index}");
    }
}

#[test]
fn test_shockwave_inner_ring_blinks_on_even_frames() {
    for index in 0..12 {
        let frame = draw(Effect::ShockwaveHeavy, index, 12);
        let has_red = count_color(&frame, PaletteColor::Red) > 0;
        assert_eq!(has_red, index % 2 == 0, "frame {index}");
    }
}

#[test]
fn test_shockwave_radius_grows() {
    // Distance from the center to the first cyan pixel along the middle row.
    let reach = |index| {
        let frame = draw(Effect::ShockwaveHeavy, index, 12);
        (64..128u32)
            .rev()
            .find(|&x| frame.pixel(x, 64) == PaletteColor::Cyan.rgba())
            .map(|x| x - 64)
    };
    let r1 = reach(1).unwrap();
    let r3 = reach(3).unwrap();
    let r5 = reach(5).unwrap();
    assert!(r1 < r3 && r3 < r5);
}

#[test]
fn test_spin_core_present_every_frame() {
    for index in 0..14 {
        let frame = draw(Effect::SlashSpin, index, 14);
        assert!(count_color(&frame, PaletteColor::Black) > 0, "frame {index}");
        assert!(count_color(&frame, PaletteColor::Cyan) > 0, "frame {index}");
    }
}

#[test]
fn test_aura_has_void_core() {
    for index in 0..16 {
        let frame = draw(Effect::DarkAuraIdle, index, 16);
        assert_eq!(frame.pixel(64, 64), PaletteColor::Black.rgba(), "frame {index}");
    }
}

#[test]
fn test_diagonal_slash_travels_up_and_right() {
    let centroid = |index| {
        let frame = draw(Effect::SlashDiagonal, index, 12);
        let (mut sx, mut sy, mut n) = (0u64, 0u64, 0u64);
        for (x, y, px) in frame.pixels() {
            if px != PaletteColor::Transparent.rgba() {
                sx += x as u64;
                sy += y as u64;
                n += 1;
            }
        }
        (sx / n, sy / n)
    };
    let (x0, y0) = centroid(0);
    let (x1, y1) = centroid(11);
    assert!(x1 > x0);
    assert!(y1 < y0);
}
