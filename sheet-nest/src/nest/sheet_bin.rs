use crate::config::SheetConfig;
use crate::entities::{PlaceablePiece, Placement, Sheet};
use crate::geometry::Rect;
use crate::util::FPA;
use log::debug;
use ordered_float::OrderedFloat;
use slotmap::{SlotMap, new_key_type};
use std::cmp::Ordering;

new_key_type! {
    /// Key of a free region within one [`SheetBin`]
    pub struct RegionKey;
}

/// A sheet that is being filled: its placements so far and the empty regions left in its usable area.
///
/// Free regions are kept in usable-area coordinates (origin at the inner margin corner) and never overlap.
#[derive(Debug, Clone)]
pub struct SheetBin {
    pub index: usize,
    pub free_regions: SlotMap<RegionKey, Rect>,
    pub placements: Vec<Placement>,
}

/// A way to seat a piece: which free region of which sheet, in which orientation.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub sheet_index: usize,
    pub region_key: RegionKey,
    pub region: Rect,
    pub rotated: bool,
    /// Free area of the region that remains after the (spacing inflated) footprint is taken out
    pub leftover_area: f64,
    /// Number of free regions the guillotine split leaves behind (0, 1 or 2)
    pub n_fragments: usize,
}

impl Candidate {
    /// Best-fit ordering: least leftover area, then lowest sheet index, fewest fragments,
    /// unrotated before rotated and finally the region origin (lowest y, then lowest x).
    pub fn cmp_fit(&self, other: &Candidate) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    fn sort_key(&self) -> (OrderedFloat<f64>, usize, usize, bool, OrderedFloat<f64>, OrderedFloat<f64>) {
        (
            OrderedFloat(self.leftover_area),
            self.sheet_index,
            self.n_fragments,
            self.rotated,
            OrderedFloat(self.region.y_min),
            OrderedFloat(self.region.x_min),
        )
    }
}

impl SheetBin {
    /// A fresh sheet whose only free region is the entire usable area.
    pub fn new(index: usize, usable: Rect) -> Self {
        let mut free_regions = SlotMap::with_key();
        free_regions.insert(usable);
        Self {
            index,
            free_regions,
            placements: vec![],
        }
    }

    /// Finds the best free region of this sheet for `piece`, considering every allowed orientation.
    pub fn best_candidate(&self, piece: &PlaceablePiece, config: &SheetConfig) -> Option<Candidate> {
        orientations(piece, config)
            .flat_map(move |rotated| {
                let (w, h) = piece.oriented(rotated);
                let (fw, fh) = (w + config.spacing, h + config.spacing);
                self.free_regions
                    .iter()
                    .filter(move |(_, region)| region.can_contain(fw, fh))
                    .map(move |(region_key, region)| Candidate {
                        sheet_index: self.index,
                        region_key,
                        region: *region,
                        rotated,
                        leftover_area: region.area() - fw * fh,
                        n_fragments: guillotine_split(*region, fw, fh).iter().flatten().count(),
                    })
            })
            .min_by(Candidate::cmp_fit)
    }

    /// Seats `piece` as described by `candidate` and splits the consumed free region.
    pub fn place(&mut self, piece: &PlaceablePiece, candidate: Candidate, config: &SheetConfig) {
        debug_assert!(candidate.sheet_index == self.index);
        let region = self
            .free_regions
            .remove(candidate.region_key)
            .expect("candidate refers to a free region of another sheet");

        let (w, h) = piece.oriented(candidate.rotated);
        let placement = Placement {
            piece_source_id: piece.source_id.clone(),
            x: region.x_min + config.margin,
            y: region.y_min + config.margin,
            width: w,
            height: h,
            rotated: candidate.rotated,
            kind: piece.kind,
        };
        debug!(
            "[NEST] placing {:?} ({w} x {h}, rotated: {}) at ({}, {}) on sheet {}",
            placement.piece_source_id, placement.rotated, placement.x, placement.y, self.index
        );
        self.placements.push(placement);

        let fragments = guillotine_split(region, w + config.spacing, h + config.spacing);
        for fragment in fragments.into_iter().flatten() {
            self.free_regions.insert(fragment);
        }
    }

    pub fn used_area(&self) -> f64 {
        self.placements.iter().map(Placement::area).sum()
    }

    pub fn into_sheet(self, config: &SheetConfig) -> Sheet {
        let used_area = self.used_area();
        Sheet {
            index: self.index,
            placements: self.placements,
            used_area,
            usable_area: config.usable_area(),
        }
    }
}

/// Orientations to try for `piece`. Square pieces are never tried rotated.
fn orientations(piece: &PlaceablePiece, config: &SheetConfig) -> impl Iterator<Item = bool> {
    let try_rotated = config.allow_rotation && FPA(piece.width) != FPA(piece.height);
    [false, true].into_iter().filter(move |r| !*r || try_rotated)
}

/// Takes a `fw` x `fh` footprint out of the bottom-left corner of `region` and cuts the remaining
/// L-shape into two rectangles with a single straight cut.
///
/// The cut follows the shorter leftover axis: when less width than height is left over, the cut
/// runs horizontally (the region above the footprint spans the full width), otherwise vertically
/// (the region to the right spans the full height). Empty fragments are dropped.
pub fn guillotine_split(region: Rect, fw: f64, fh: f64) -> [Option<Rect>; 2] {
    let x_cut = region.x_min + fw;
    let y_cut = region.y_min + fh;
    let leftover_w = region.width() - fw;
    let leftover_h = region.height() - fh;

    let (right, top) = match leftover_w < leftover_h {
        true => (
            Rect::try_new(x_cut, region.y_min, region.x_max, y_cut),
            Rect::try_new(region.x_min, y_cut, region.x_max, region.y_max),
        ),
        false => (
            Rect::try_new(x_cut, region.y_min, region.x_max, region.y_max),
            Rect::try_new(region.x_min, y_cut, x_cut, region.y_max),
        ),
    };
    let non_empty = |r: Option<Rect>| {
        r.filter(|r| FPA(r.width()) > FPA(0.0) && FPA(r.height()) > FPA(0.0))
    };
    [non_empty(right), non_empty(top)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rect {
        Rect::try_new(x_min, y_min, x_max, y_max).unwrap()
    }

    #[test]
    fn split_along_shorter_leftover_axis() {
        let region = rect(0.0, 0.0, 1000.0, 1000.0);
        // equal leftovers: vertical cut, right fragment spans the full height
        assert_eq!(
            guillotine_split(region, 400.0, 400.0),
            [Some(rect(400.0, 0.0, 1000.0, 1000.0)), Some(rect(0.0, 400.0, 400.0, 1000.0))]
        );
        // less width left over: horizontal cut, top fragment spans the full width
        assert_eq!(
            guillotine_split(region, 900.0, 100.0),
            [Some(rect(900.0, 0.0, 1000.0, 100.0)), Some(rect(0.0, 100.0, 1000.0, 1000.0))]
        );
    }

    #[test]
    fn exact_fit_leaves_no_fragments() {
        let region = rect(10.0, 20.0, 110.0, 70.0);
        assert_eq!(guillotine_split(region, 100.0, 50.0), [None, None]);
        assert_eq!(
            guillotine_split(region, 100.0, 30.0),
            [None, Some(rect(10.0, 50.0, 110.0, 70.0))]
        );
    }

    #[test]
    fn candidate_prefers_tightest_region() {
        let config = SheetConfig::new(1000.0, 1000.0);
        let mut bin = SheetBin::new(0, rect(0.0, 0.0, 1000.0, 1000.0));
        let piece = PlaceablePiece::new("p", 400.0, 400.0);
        let first = bin.best_candidate(&piece, &config).unwrap();
        bin.place(&piece, first, &config);
        assert_eq!(bin.free_regions.len(), 2);

        // the 400 x 600 region left above the first piece is a tighter fit than the 600 x 1000 one
        let second = bin.best_candidate(&piece, &config).unwrap();
        assert_eq!(second.region, rect(0.0, 400.0, 400.0, 1000.0));
        assert_eq!(second.leftover_area, 80_000.0);
        bin.place(&piece, second, &config);
        assert_eq!((bin.placements[1].x, bin.placements[1].y), (0.0, 400.0));
    }

    #[test]
    fn rotation_is_used_only_when_allowed() {
        let usable = rect(0.0, 0.0, 100.0, 300.0);
        let piece = PlaceablePiece::new("long", 250.0, 80.0);

        let rotating = SheetConfig::new(100.0, 300.0);
        let candidate = SheetBin::new(0, usable).best_candidate(&piece, &rotating).unwrap();
        assert!(candidate.rotated);

        let fixed = rotating.with_rotation(false);
        assert!(SheetBin::new(0, usable).best_candidate(&piece, &fixed).is_none());
    }

    #[test]
    fn spacing_inflates_the_fit_check_but_not_the_placement() {
        let config = SheetConfig::new(500.0, 500.0).with_margin(10.0).with_spacing(10.0);
        let mut bin = SheetBin::new(0, config.usable_rect().unwrap());
        let piece = PlaceablePiece::new("p", 300.0, 300.0);
        let c = bin.best_candidate(&piece, &config).unwrap();
        bin.place(&piece, c, &config);
        let p = &bin.placements[0];
        assert_eq!((p.x, p.y, p.width, p.height), (10.0, 10.0, 300.0, 300.0));
        // 170 mm are left on either side, not enough for a second 300 + 10 footprint
        assert!(bin.best_candidate(&piece, &config).is_none());
        assert!(bin.free_regions.values().all(|r| r.x_min >= 310.0 || r.y_min >= 310.0));
    }

    fn candidate(sheet_index: usize, n_fragments: usize, rotated: bool, x: f64, y: f64) -> Candidate {
        Candidate {
            sheet_index,
            region_key: RegionKey::default(),
            region: rect(x, y, x + 100.0, y + 100.0),
            rotated,
            leftover_area: 500.0,
            n_fragments,
        }
    }

    #[test]
    fn equal_leftover_ties_are_broken_in_order() {
        let base = candidate(1, 1, false, 50.0, 50.0);
        let less_leftover = Candidate {
            leftover_area: 499.0,
            ..candidate(3, 2, true, 90.0, 90.0)
        };
        assert_eq!(less_leftover.cmp_fit(&base), Ordering::Less);

        // lower sheet index wins over every later key
        assert_eq!(candidate(0, 2, true, 90.0, 90.0).cmp_fit(&base), Ordering::Less);
        // same sheet: fewer fragments
        assert_eq!(candidate(1, 0, true, 90.0, 90.0).cmp_fit(&base), Ordering::Less);
        assert_eq!(candidate(1, 2, false, 0.0, 0.0).cmp_fit(&base), Ordering::Greater);
        // same fragments: unrotated before rotated
        assert_eq!(candidate(1, 1, true, 0.0, 0.0).cmp_fit(&base), Ordering::Greater);
        // same orientation: lowest y, then lowest x
        assert_eq!(candidate(1, 1, false, 90.0, 10.0).cmp_fit(&base), Ordering::Less);
        assert_eq!(candidate(1, 1, false, 10.0, 90.0).cmp_fit(&base), Ordering::Greater);
        assert_eq!(candidate(1, 1, false, 10.0, 50.0).cmp_fit(&base), Ordering::Less);
        assert_eq!(candidate(1, 1, false, 50.0, 50.0).cmp_fit(&base), Ordering::Equal);

        let mut shuffled = [
            candidate(1, 1, false, 50.0, 50.0),
            candidate(1, 1, true, 0.0, 0.0),
            candidate(2, 0, false, 0.0, 0.0),
            candidate(1, 1, false, 10.0, 50.0),
            candidate(1, 0, true, 90.0, 90.0),
        ];
        shuffled.sort_by(Candidate::cmp_fit);
        let order = shuffled
            .iter()
            .map(|c| (c.sheet_index, c.n_fragments, c.rotated, c.region.x_min))
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            [
                (1, 0, true, 90.0),
                (1, 1, false, 10.0),
                (1, 1, false, 50.0),
                (1, 1, true, 0.0),
                (2, 0, false, 0.0),
            ]
        );
    }

    #[test]
    fn unrotated_wins_when_both_orientations_fit_equally() {
        // 50 x 20 and 20 x 50 leave the same area and two fragments each in a square region
        let config = SheetConfig::new(100.0, 100.0);
        let bin = SheetBin::new(0, rect(0.0, 0.0, 100.0, 100.0));
        let c = bin.best_candidate(&PlaceablePiece::new("p", 50.0, 20.0), &config).unwrap();
        assert!(!c.rotated);
        assert_eq!((c.leftover_area, c.n_fragments), (9_000.0, 2));
    }

    #[test]
    fn lower_sheet_index_wins_between_identical_sheets() {
        let config = SheetConfig::new(100.0, 100.0);
        let piece = PlaceablePiece::new("p", 30.0, 30.0);
        let bins = [1, 0, 2].map(|i| SheetBin::new(i, rect(0.0, 0.0, 100.0, 100.0)));
        let best = bins
            .iter()
            .filter_map(|bin| bin.best_candidate(&piece, &config))
            .min_by(Candidate::cmp_fit)
            .unwrap();
        assert_eq!(best.sheet_index, 0);
    }

    #[test]
    fn lowest_region_wins_between_equal_regions() {
        let config = SheetConfig::new(100.0, 100.0);
        let mut bin = SheetBin::new(0, rect(0.0, 0.0, 100.0, 100.0));
        bin.free_regions.clear();
        bin.free_regions.insert(rect(60.0, 60.0, 100.0, 100.0));
        bin.free_regions.insert(rect(0.0, 60.0, 40.0, 100.0));
        bin.free_regions.insert(rect(60.0, 0.0, 100.0, 40.0));
        let c = bin.best_candidate(&PlaceablePiece::new("sq", 40.0, 40.0), &config).unwrap();
        assert_eq!(c.region, rect(60.0, 0.0, 100.0, 40.0));

        bin.free_regions.retain(|_, r| r.y_min > 0.0);
        let c = bin.best_candidate(&PlaceablePiece::new("sq", 40.0, 40.0), &config).unwrap();
        assert_eq!(c.region, rect(0.0, 60.0, 40.0, 100.0));
    }
}
