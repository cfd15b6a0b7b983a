use crate::core::{ImageBlock, ImageNode, convert::image_node_to_image_block};

/// One image supplied alongside a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageInput {
    Node(ImageNode),
    Block(ImageBlock),
}

impl From<ImageNode> for ImageInput {
    fn from(node: ImageNode) -> Self {
        ImageInput::Node(node)
    }
}

impl From<ImageBlock> for ImageInput {
    fn from(block: ImageBlock) -> Self {
        ImageInput::Block(block)
    }
}

/// The images for one completion call.
///
/// Nodes are converted to image blocks when the message is built. Blocks
/// are used exactly as given. `Mixed` converts element by element.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageInputs {
    Nodes(Vec<ImageNode>),
    Blocks(Vec<ImageBlock>),
    Mixed(Vec<ImageInput>),
}

impl ImageInputs {
    pub fn none() -> Self {
        ImageInputs::Blocks(Vec::new())
    }

    pub fn len(&self) -> usize {
        match self {
            ImageInputs::Nodes(nodes) => nodes.len(),
            ImageInputs::Blocks(blocks) => blocks.len(),
            ImageInputs::Mixed(inputs) => inputs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            ImageInputs::Nodes(_) => "nodes",
            ImageInputs::Blocks(_) => "blocks",
            ImageInputs::Mixed(_) => "mixed",
        }
    }

    /// Image blocks in input order.
    pub fn into_blocks(self) -> Vec<ImageBlock> {
        match self {
            ImageInputs::Nodes(nodes) => nodes.iter().map(image_node_to_image_block).collect(),
            ImageInputs::Blocks(blocks) => blocks,
            ImageInputs::Mixed(inputs) => inputs
                .into_iter()
                .map(|input| match input {
                    ImageInput::Node(node) => image_node_to_image_block(&node),
                    ImageInput::Block(block) => block,
                })
                .collect(),
        }
    }
}

impl Default for ImageInputs {
    fn default() -> Self {
        Self::none()
    }
}

impl From<Vec<ImageNode>> for ImageInputs {
    fn from(nodes: Vec<ImageNode>) -> Self {
        ImageInputs::Nodes(nodes)
    }
}

impl From<Vec<ImageBlock>> for ImageInputs {
    fn from(blocks: Vec<ImageBlock>) -> Self {
        ImageInputs::Blocks(blocks)
    }
}

impl From<Vec<ImageInput>> for ImageInputs {
    fn from(inputs: Vec<ImageInput>) -> Self {
        ImageInputs::Mixed(inputs)
    }
}

impl FromIterator<ImageInput> for ImageInputs {
    fn from_iter<I: IntoIterator<Item = ImageInput>>(iter: I) -> Self {
        ImageInputs::Mixed(iter.into_iter().collect())
    }
}
