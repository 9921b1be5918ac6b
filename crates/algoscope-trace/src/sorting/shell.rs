use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer) {
    let n = t.len();
    let mut gap = n / 2;
    while gap > 0 {
        t.frame(format!("Gap {gap}")).emit();
        for i in gap..n {
            let mut j = i;
            while j >= gap {
                let (a, b) = (t.get(j - gap), t.get(j));
                t.frame(format!("Comparing {a} and {b} ({gap} apart)"))
                    .comparing([j - gap, j])
                    .current(j)
                    .emit();
                if a <= b {
                    break;
                }
                t.swap(j - gap, j);
                t.frame(format!("Swapped {a} and {b}"))
                    .swapped([j - gap, j])
                    .emit();
                j -= gap;
            }
        }
        gap /= 2;
    }
    t.finish_sorted();
}
