use glam::Mat4;

use crate::gl::GlApi;

/// Uniform names the frame renderer writes.
pub const UNIFORM_NAMES: [&str; 4] = ["model", "view", "projection", "time"];

/// Location of a named uniform, or the "unused" sentinel.
///
/// A name the linked program does not use resolves to the sentinel. Writing to
/// the sentinel is a no-op, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformHandle<L> {
    location: Option<L>,
}

impl<L> UniformHandle<L> {
    pub const fn unused() -> Self {
        Self { location: None }
    }

    pub fn is_unused(&self) -> bool {
        self.location.is_none()
    }

    pub fn location(&self) -> Option<&L> {
        self.location.as_ref()
    }

    pub fn set_f32<G>(&self, gl: &G, value: f32)
    where
        G: GlApi<UniformLocation = L>,
    {
        gl.uniform_f32(self.location.as_ref(), value);
    }

    pub fn set_mat4<G>(&self, gl: &G, value: &Mat4)
    where
        G: GlApi<UniformLocation = L>,
    {
        gl.uniform_mat4(self.location.as_ref(), &value.to_cols_array());
    }
}

/// Handles for the renderer's uniforms, resolved once after linking.
#[derive(Debug)]
pub struct Uniforms<G: GlApi> {
    model: UniformHandle<G::UniformLocation>,
    view: UniformHandle<G::UniformLocation>,
    projection: UniformHandle<G::UniformLocation>,
    time: UniformHandle<G::UniformLocation>,
}

impl<G: GlApi> Uniforms<G> {
    /// Looks up every name in [`UNIFORM_NAMES`] on `program`.
    pub fn resolve(gl: &G, program: G::Program) -> Self {
        let lookup = |name: &str| {
            let location = gl.uniform_location(program, name);
            if location.is_none() {
                log::debug!("uniform '{name}' is not used by the program");
            }
            UniformHandle { location }
        };

        let [model, view, projection, time] = UNIFORM_NAMES;
        Self {
            model: lookup(model),
            view: lookup(view),
            projection: lookup(projection),
            time: lookup(time),
        }
    }

    pub fn model(&self) -> &UniformHandle<G::UniformLocation> {
        &self.model
    }

    pub fn view(&self) -> &UniformHandle<G::UniformLocation> {
        &self.view
    }

    pub fn projection(&self) -> &UniformHandle<G::UniformLocation> {
        &self.projection
    }

    pub fn time(&self) -> &UniformHandle<G::UniformLocation> {
        &self.time
    }

    /// Number of names that resolved to a real location.
    pub fn resolved_count(&self) -> usize {
        [&self.model, &self.view, &self.projection, &self.time]
            .into_iter()
            .filter(|h| !h.is_unused())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::fake::{Call, RecordingGl};

    #[test]
    fn resolves_all_names() {
        let gl = RecordingGl::new();
        let uniforms = Uniforms::resolve(&gl, 1);

        assert_eq!(uniforms.resolved_count(), 4);
        assert_eq!(uniforms.model().location().map(String::as_str), Some("model"));
        assert_eq!(uniforms.time().location().map(String::as_str), Some("time"));
    }

    #[test]
    fn absent_name_is_unused_sentinel() {
        let gl = RecordingGl::new().without_uniform("time");
        let uniforms = Uniforms::resolve(&gl, 1);

        assert!(uniforms.time().is_unused());
        assert_eq!(uniforms.resolved_count(), 3);
    }

    #[test]
    fn writes_to_sentinel_are_ignored() {
        let gl = RecordingGl::new();
        let unused = UniformHandle::<String>::unused();

        unused.set_f32(&gl, 1.5);
        unused.set_mat4(&gl, &Mat4::IDENTITY);

        // The backend sees a `None` location, which GL defines as a no-op.
        assert_eq!(
            gl.calls(),
            vec![
                Call::UniformF32(None, 1.5),
                Call::UniformMat4(None, Mat4::IDENTITY.to_cols_array()),
            ]
        );
        assert!(gl.f32_writes("time").is_empty());
    }

    #[test]
    fn matrices_are_written_column_major() {
        let gl = RecordingGl::new();
        let uniforms = Uniforms::resolve(&gl, 1);
        let m = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));

        uniforms.model().set_mat4(&gl, &m);

        let written = gl.mat4_writes("model");
        assert_eq!(written.len(), 1);
        assert_eq!(&written[0][12..15], &[1.0, 2.0, 3.0]);
    }
}
